//! Geometry capabilities consumed by the oracle.
//!
//! The oracle never computes geometry itself. Everything it needs from a
//! geometry engine (buffering, topological predicates, prepared predicates,
//! boundaries and distance measurement) is reached through this crate, which
//! adapts the `geo` crate to the shapes the oracle works with.

/// Signed-distance buffering and end cap styles.
pub mod buffer;
/// Boundary and linework extraction.
pub mod components;
/// Nearest-point and discrete Hausdorff distance measurement.
pub mod distance;
/// Engine error type.
pub mod error;
/// Scalar measures and simple derived geometries.
pub mod measure;
/// Boolean overlay of areal geometries.
pub mod overlay;
/// DE-9IM predicates, plain and prepared.
pub mod predicate;

pub use buffer::{BufferParams, DEFAULT_QUADRANT_SEGMENTS, EndCapStyle, MAX_QUADRANT_SEGMENTS, buffer};
pub use components::{atomic_components, boundary, linear_components, ring_lines};
pub use distance::{NearestPoints, nearest_points, oriented_hausdorff};
pub use error::EngineError;
pub use geo::{Coord, Geometry};
pub use overlay::{OverlayOp, overlay};
pub use predicate::{Predicate, covers, evaluate, evaluate_prepared};

/// Returns the WKT type name of a geometry, used in diagnostics.
pub fn kind_name(geometry: &Geometry<f64>) -> &'static str {
	match geometry {
		Geometry::Point(_) => "Point",
		Geometry::Line(_) => "Line",
		Geometry::LineString(_) => "LineString",
		Geometry::Polygon(_) => "Polygon",
		Geometry::MultiPoint(_) => "MultiPoint",
		Geometry::MultiLineString(_) => "MultiLineString",
		Geometry::MultiPolygon(_) => "MultiPolygon",
		Geometry::GeometryCollection(_) => "GeometryCollection",
		Geometry::Rect(_) => "Rect",
		Geometry::Triangle(_) => "Triangle",
	}
}

/// Returns true for geometries whose every component is an area.
pub fn is_polygonal(geometry: &Geometry<f64>) -> bool {
	matches!(
		geometry,
		Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_)
	)
}

/// An empty geometry collection, the engine's canonical "nothing".
pub fn empty_collection() -> Geometry<f64> {
	Geometry::GeometryCollection(geo::GeometryCollection(Vec::new()))
}
