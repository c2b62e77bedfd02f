use geo::{Area, Geometry, HasDimensions};
use wkt::TryFromWkt;

use super::{BufferParams, DEFAULT_QUADRANT_SEGMENTS, EndCapStyle, MAX_QUADRANT_SEGMENTS, buffer};
use crate::predicate::covers;

fn geom(text: &str) -> Geometry<f64> {
	Geometry::try_from_wkt_str(text).expect("valid wkt")
}

#[test]
fn end_cap_codes_follow_test_file_convention() {
	assert_eq!(EndCapStyle::from_code(1), Some(EndCapStyle::Round));
	assert_eq!(EndCapStyle::from_code(3), Some(EndCapStyle::Square));
	assert_eq!(EndCapStyle::from_code(0), None);
	assert_eq!(EndCapStyle::Flat.code(), 2);
}

#[test]
fn params_default_to_round_caps_and_eight_segments() {
	let params = BufferParams::new(2.0);
	assert_eq!(params.quadrant_segments, DEFAULT_QUADRANT_SEGMENTS);
	assert_eq!(params.end_cap, EndCapStyle::Round);
	assert!((params.arc_step() - std::f64::consts::PI / 16.0).abs() < 1e-12);
}

#[test]
fn non_positive_segment_counts_clamp_to_one() {
	let params = BufferParams::new(1.0).quadrant_segments(-4);
	assert!((params.arc_step() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn huge_segment_counts_clamp_to_maximum() {
	let capped = BufferParams::new(1.0).quadrant_segments(MAX_QUADRANT_SEGMENTS);
	let huge = BufferParams::new(1.0).quadrant_segments(1_000_000_000);
	assert_eq!(huge.arc_step(), capped.arc_step());
	assert!((huge.arc_step() - std::f64::consts::FRAC_PI_2 / 1024.0).abs() < 1e-15);
}

#[test]
fn positive_polygon_buffer_covers_input() {
	let square = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let result = buffer(&square, &BufferParams::new(2.0));

	assert!(covers(&result, &square));
	// Bounded above by the exact rounded square.
	let exact = 100.0 + 80.0 + std::f64::consts::PI * 4.0;
	assert!(result.unsigned_area() > 180.0);
	assert!(result.unsigned_area() <= exact + 1e-9);
}

#[test]
fn negative_line_buffer_is_empty() {
	let line = geom("LINESTRING(0 0,10 0)");
	assert!(buffer(&line, &BufferParams::new(-1.0)).is_empty());
}

#[test]
fn flat_caps_stop_at_line_ends() {
	let line = geom("LINESTRING(0 0,10 0)");
	let flat = buffer(&line, &BufferParams::new(1.0).end_cap(EndCapStyle::Flat));
	let round = buffer(&line, &BufferParams::new(1.0));

	assert!((flat.unsigned_area() - 20.0).abs() < 1e-6);
	assert!(round.unsigned_area() > flat.unsigned_area());
}
