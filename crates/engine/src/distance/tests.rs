use geo::{Geometry, coord};
use wkt::TryFromWkt;

use super::{nearest_points, oriented_hausdorff};

fn geom(text: &str) -> Geometry<f64> {
	Geometry::try_from_wkt_str(text).expect("valid wkt")
}

#[test]
fn separated_squares_report_gap_and_locations() {
	let a = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let b = geom("POLYGON((15 0,20 0,20 10,15 10,15 0))");

	let nearest = nearest_points(&a, &b).expect("both non-empty");
	assert!((nearest.distance - 5.0).abs() < 1e-12);
	assert_eq!(nearest.points[0].x, 10.0);
	assert_eq!(nearest.points[1].x, 15.0);
}

#[test]
fn point_inside_area_is_at_zero_distance() {
	let area = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let point = geom("POINT(3 4)");

	let nearest = nearest_points(&area, &point).unwrap();
	assert_eq!(nearest.distance, 0.0);
	assert_eq!(nearest.points[0], coord! { x: 3.0, y: 4.0 });
}

#[test]
fn crossing_lines_meet_at_intersection() {
	let a = geom("LINESTRING(0 0,10 10)");
	let b = geom("LINESTRING(0 10,10 0)");

	let nearest = nearest_points(&a, &b).unwrap();
	assert_eq!(nearest.distance, 0.0);
	assert_eq!(nearest.points[0], coord! { x: 5.0, y: 5.0 });
}

#[test]
fn empty_operands_have_no_distance() {
	let empty = geom("POLYGON EMPTY");
	let point = geom("POINT(0 0)");
	assert!(nearest_points(&empty, &point).is_none());
	assert!(oriented_hausdorff(&point, &empty, 0.25).is_none());
}

#[test]
fn hausdorff_reports_furthest_sample() {
	let line = geom("LINESTRING(0 0,10 0)");
	let origin = geom("POINT(0 0)");

	let worst = oriented_hausdorff(&line, &origin, 0.25).unwrap();
	assert!((worst.distance - 10.0).abs() < 1e-12);
	assert_eq!(worst.points[0], coord! { x: 10.0, y: 0.0 });
	assert_eq!(worst.points[1], coord! { x: 0.0, y: 0.0 });
}

#[test]
fn densification_finds_deviation_between_vertices() {
	let line = geom("LINESTRING(0 0,10 0)");
	let ends = geom("MULTIPOINT((0 0),(10 0))");

	let coarse = oriented_hausdorff(&line, &ends, 1.0).unwrap();
	assert_eq!(coarse.distance, 0.0);

	let fine = oriented_hausdorff(&line, &ends, 0.5).unwrap();
	assert!((fine.distance - 5.0).abs() < 1e-12);
}

#[test]
fn hausdorff_measures_to_rings_not_area() {
	let square = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
	let centre = geom("POINT(5 5)");

	let worst = oriented_hausdorff(&centre, &square, 0.25).unwrap();
	assert!((worst.distance - 5.0).abs() < 1e-12);
}
