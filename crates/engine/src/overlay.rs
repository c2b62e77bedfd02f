use geo::{BooleanOps, Geometry, MultiPolygon};

use crate::{EngineError, kind_name};

/// Boolean overlay operations on areal geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayOp {
	/// Points in both operands.
	Intersection,
	/// Points in either operand.
	Union,
	/// Points in the first operand only.
	Difference,
	/// Points in exactly one operand.
	SymDifference,
}

impl OverlayOp {
	/// Operation name as used in test files.
	pub fn name(self) -> &'static str {
		match self {
			Self::Intersection => "intersection",
			Self::Union => "union",
			Self::Difference => "difference",
			Self::SymDifference => "symDifference",
		}
	}
}

/// Computes `op` on two areal geometries.
pub fn overlay(op: OverlayOp, a: &Geometry<f64>, b: &Geometry<f64>) -> Result<Geometry<f64>, EngineError> {
	let lhs = as_multi_polygon(op, a)?;
	let rhs = as_multi_polygon(op, b)?;
	let result = match op {
		OverlayOp::Intersection => lhs.intersection(&rhs),
		OverlayOp::Union => lhs.union(&rhs),
		OverlayOp::Difference => lhs.difference(&rhs),
		OverlayOp::SymDifference => lhs.xor(&rhs),
	};
	Ok(Geometry::MultiPolygon(result))
}

fn as_multi_polygon(op: OverlayOp, geometry: &Geometry<f64>) -> Result<MultiPolygon<f64>, EngineError> {
	match geometry {
		Geometry::Polygon(polygon) => Ok(MultiPolygon::new(vec![polygon.clone()])),
		Geometry::MultiPolygon(polygons) => Ok(polygons.clone()),
		Geometry::Rect(rect) => Ok(MultiPolygon::new(vec![rect.to_polygon()])),
		Geometry::Triangle(triangle) => Ok(MultiPolygon::new(vec![triangle.to_polygon()])),
		other => Err(EngineError::NonAreal {
			op: op.name(),
			kind: kind_name(other),
		}),
	}
}
