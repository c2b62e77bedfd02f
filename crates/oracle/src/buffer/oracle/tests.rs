use gauge_engine::{BufferParams, EndCapStyle};
use gauge_invocation::{InvokeError, parse_geometry};
use geo::{Geometry, coord};
use pretty_assertions::assert_eq;

use super::BufferCorrectnessOracle;
use crate::config::BufferOracleConfig;

fn geom(text: &str) -> Geometry<f64> {
	parse_geometry(text).unwrap()
}

fn message(err: InvokeError) -> String {
	match err {
		InvokeError::ValidationFailed { message, .. } => message,
		other => panic!("expected a validation failure, got {other:?}"),
	}
}

#[test]
fn exact_offset_square_passes() {
	let oracle = BufferCorrectnessOracle::default();
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let shrunk = geom("POLYGON((1 1,9 1,9 9,1 9,1 1))");
	assert_eq!(oracle.validate(&input, &BufferParams::new(-1.0), &shrunk), Ok(()));
}

#[test]
fn degenerate_input_needs_empty_result() {
	let oracle = BufferCorrectnessOracle::default();
	let line = geom("LINESTRING(0 0,10 0)");
	let junk = geom("POLYGON((0 0,1 0,1 1,0 0))");

	assert_eq!(oracle.validate(&line, &BufferParams::new(-1.0), &geom("MULTIPOLYGON EMPTY")), Ok(()));
	assert_eq!(
		message(oracle.validate(&line, &BufferParams::new(0.0), &junk).unwrap_err()),
		"expected empty buffer result"
	);
}

#[test]
fn positive_buffer_must_cover_input() {
	let oracle = BufferCorrectnessOracle::default();
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let too_small = geom("POLYGON((1 1,9 1,9 9,1 9,1 1))");
	let err = oracle.validate(&input, &BufferParams::new(1.0), &too_small).unwrap_err();
	assert_eq!(
		err,
		InvokeError::ValidationFailed {
			message: "geometry not covered by positive buffer".to_string(),
			location: None,
		}
	);
}

#[test]
fn negative_buffer_must_lie_inside_input() {
	let oracle = BufferCorrectnessOracle::default();
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let escaped = geom("POLYGON((5 5,15 5,15 15,5 15,5 5))");
	assert_eq!(
		message(oracle.validate(&input, &BufferParams::new(-1.0), &escaped).unwrap_err()),
		"geometry does not cover negative buffer"
	);
}

#[test]
fn undersized_negative_buffer_reports_location() {
	let oracle = BufferCorrectnessOracle::default();
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	// Inset by 1 on three sides but 2 on the right.
	let lopsided = geom("POLYGON((1 1,8 1,8 9,1 9,1 1))");

	let err = oracle.validate(&input, &BufferParams::new(-1.0), &lopsided).unwrap_err();
	match err {
		InvokeError::ValidationFailed {
			message,
			location: Some(location),
		} => {
			assert!(message.starts_with("distance between buffer curve and input is too large"));
			assert_eq!(location.x, 10.0);
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn oversized_positive_envelope_is_rejected_at_centre() {
	let oracle = BufferCorrectnessOracle::default();
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let short = geom("POLYGON((-1 -1,11 -1,11 10.5,-1 10.5,-1 -1))");

	let err = oracle.validate(&input, &BufferParams::new(1.0), &short).unwrap_err();
	match err {
		InvokeError::ValidationFailed { message, location } => {
			assert_eq!(message, "buffer envelope is incorrect");
			let location = location.unwrap();
			let centre = coord! { x: 5.0, y: 4.75 };
			assert!((location.x - centre.x).abs() < 1e-9 && (location.y - centre.y).abs() < 1e-9);
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn flat_caps_skip_round_cap_bounds_for_lines() {
	let oracle = BufferCorrectnessOracle::default();
	let line = geom("LINESTRING(0 0,10 0)");
	let flat = geom("POLYGON((0 -1,10 -1,10 1,0 1,0 -1))");

	assert!(oracle.validate(&line, &BufferParams::new(1.0), &flat).is_err());
	let params = BufferParams::new(1.0).end_cap(EndCapStyle::Flat);
	assert_eq!(oracle.validate(&line, &params, &flat), Ok(()));
}

#[test]
fn validity_check_follows_configuration() {
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	// Correct inset, plus a sliver overlapping it in the corner.
	let overlapping = geom("MULTIPOLYGON(((1 1,9 1,9 9,1 9,1 1)),((1 1,1.005 1,1.005 1.005,1 1.005,1 1)))");
	let params = BufferParams::new(-1.0);

	let strict = BufferCorrectnessOracle::default();
	assert_eq!(message(strict.validate(&input, &params, &overlapping).unwrap_err()), "buffer result is invalid");

	let lenient = BufferCorrectnessOracle::new(BufferOracleConfig {
		check_validity: false,
		..BufferOracleConfig::default()
	});
	assert_eq!(lenient.validate(&input, &params, &overlapping), Ok(()));
}

#[test]
fn small_distance_envelope_uses_scaled_padding() {
	let oracle = BufferCorrectnessOracle::default();
	let input = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	// Short by 0.0008 at the top: inside a 0.001 pad, outside 0.05 * 0.012.
	let short = geom("POLYGON((-0.05 -0.05,10.05 -0.05,10.05 10.0492,-0.05 10.0492,-0.05 -0.05))");

	let err = oracle.validate(&input, &BufferParams::new(0.05), &short).unwrap_err();
	assert_eq!(message(err), "buffer envelope is incorrect");
}
