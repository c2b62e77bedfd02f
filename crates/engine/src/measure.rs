use geo::algorithm::dimensions::Dimensions;
use geo::{
	Area, BoundingRect, Centroid, ConvexHull, CoordsIter, Distance, Euclidean, Geometry, HasDimensions, InteriorPoint,
	Point, Validation,
};

use crate::{empty_collection, linear_components};

/// Unsigned area of `geometry`.
pub fn area(geometry: &Geometry<f64>) -> f64 {
	geometry.unsigned_area()
}

/// Total length of the linear components, polygon rings included.
pub fn length(geometry: &Geometry<f64>) -> f64 {
	linear_components(geometry)
		.iter()
		.flat_map(|line| line.lines())
		.map(|segment| Euclidean.distance(segment.start_point(), segment.end_point()))
		.sum()
}

/// Number of vertices.
pub fn num_points(geometry: &Geometry<f64>) -> i64 {
	geometry.coords_count() as i64
}

/// Topological dimension code: `-1` empty, `0` puntal, `1` lineal, `2` areal.
pub fn dimension(geometry: &Geometry<f64>) -> i64 {
	match geometry.dimensions() {
		Dimensions::Empty => -1,
		Dimensions::ZeroDimensional => 0,
		Dimensions::OneDimensional => 1,
		Dimensions::TwoDimensional => 2,
	}
}

/// Returns true when `geometry` satisfies the engine's validity rules.
pub fn is_valid(geometry: &Geometry<f64>) -> bool {
	geometry.is_valid()
}

/// Axis-aligned envelope. Degenerate envelopes collapse to a point.
pub fn envelope(geometry: &Geometry<f64>) -> Geometry<f64> {
	match geometry.bounding_rect() {
		Some(rect) if rect.min() == rect.max() => Geometry::Point(Point::from(rect.min())),
		Some(rect) => Geometry::Polygon(rect.to_polygon()),
		None => empty_collection(),
	}
}

/// Centroid, or an empty collection for empty input.
pub fn centroid(geometry: &Geometry<f64>) -> Geometry<f64> {
	geometry.centroid().map_or_else(empty_collection, Geometry::Point)
}

/// A point guaranteed to lie in the interior of `geometry` when one exists.
pub fn interior_point(geometry: &Geometry<f64>) -> Geometry<f64> {
	geometry.interior_point().map_or_else(empty_collection, Geometry::Point)
}

/// Convex hull of all vertices.
pub fn convex_hull(geometry: &Geometry<f64>) -> Geometry<f64> {
	if geometry.is_empty() {
		return empty_collection();
	}
	Geometry::Polygon(geometry.convex_hull())
}
