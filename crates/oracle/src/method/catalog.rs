//! The engine method catalog.
//!
//! The subject geometry is the implicit first operand of every method; the
//! parameters listed here are the remaining ones.

use gauge_engine::measure;
use gauge_engine::{BufferParams, OverlayOp, Predicate, boundary, evaluate, nearest_points, overlay};
use gauge_invocation::{InvokeError, Value, ValueType, double_arg, end_cap_arg, geometry_arg, integer_arg};
use gauge_registry::{FunctionDescriptor, FunctionHandler};
use geo::{Geometry, HasDimensions};

use ValueType::{Boolean, Double, EndCapStyle, Integer};

const GEOMETRY: ValueType = ValueType::Geometry;

const fn method(
	name: &'static str,
	params: &'static [ValueType],
	returns: ValueType,
	description: &'static str,
	handler: FunctionHandler,
) -> FunctionDescriptor {
	FunctionDescriptor {
		name,
		params,
		returns,
		description,
		handler,
	}
}

/// Every engine method overload.
pub static METHODS: &[FunctionDescriptor] = &[
	method("area", &[], Double, "Area of the geometry", area),
	method("boundary", &[], GEOMETRY, "Topological boundary", boundary_of),
	method("buffer", &[Double], GEOMETRY, "Buffer by a signed distance", buffer),
	method("buffer", &[Double, Integer], GEOMETRY, "Buffer with quadrant segments", buffer),
	method("buffer", &[Double, Integer, EndCapStyle], GEOMETRY, "Buffer with quadrant segments and end cap style", buffer),
	method("centroid", &[], GEOMETRY, "Centroid", centroid),
	method("contains", &[GEOMETRY], Boolean, "Subject contains the argument", contains),
	method("containsProperly", &[GEOMETRY], Boolean, "Argument lies in the subject's interior", contains_properly),
	method("convexHull", &[], GEOMETRY, "Convex hull", convex_hull),
	method("coveredBy", &[GEOMETRY], Boolean, "Subject is covered by the argument", covered_by),
	method("covers", &[GEOMETRY], Boolean, "Subject covers the argument", covers),
	method("crosses", &[GEOMETRY], Boolean, "Subject crosses the argument", crosses),
	method("difference", &[GEOMETRY], GEOMETRY, "Areal difference", difference),
	method("dimension", &[], Integer, "Topological dimension", dimension),
	method("disjoint", &[GEOMETRY], Boolean, "Subject and argument share no point", disjoint),
	method("distance", &[GEOMETRY], Double, "Minimum distance to the argument", distance),
	method("envelope", &[], GEOMETRY, "Bounding envelope", envelope),
	method("equalsTopo", &[GEOMETRY], Boolean, "Subject and argument are topologically equal", equals_topo),
	method("interiorPoint", &[], GEOMETRY, "A point in the interior", interior_point),
	method("intersection", &[GEOMETRY], GEOMETRY, "Areal intersection", intersection),
	method("intersects", &[GEOMETRY], Boolean, "Subject and argument share a point", intersects),
	method("isEmpty", &[], Boolean, "Geometry has no points", is_empty),
	method("isValid", &[], Boolean, "Geometry is topologically valid", is_valid),
	method("length", &[], Double, "Length of the linework", length),
	method("numPoints", &[], Integer, "Number of vertices", num_points),
	method("overlaps", &[GEOMETRY], Boolean, "Subject overlaps the argument", overlaps),
	method("symDifference", &[GEOMETRY], GEOMETRY, "Areal symmetric difference", sym_difference),
	method("touches", &[GEOMETRY], Boolean, "Subject touches the argument", touches),
	method("union", &[GEOMETRY], GEOMETRY, "Areal union", union),
	method("within", &[GEOMETRY], Boolean, "Subject lies within the argument", within),
];

fn area(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Double(measure::area(geometry)))
}

fn boundary_of(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Geometry(boundary(geometry)?))
}

fn buffer(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
	let mut params = BufferParams::new(double_arg(args, 0)?);
	if args.len() > 1 {
		params = params.quadrant_segments(integer_arg(args, 1)?);
	}
	if args.len() > 2 {
		params = params.end_cap(end_cap_arg(args, 2)?);
	}
	Ok(Value::Geometry(gauge_engine::buffer(geometry, &params)))
}

fn centroid(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Geometry(measure::centroid(geometry)))
}

fn convex_hull(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Geometry(measure::convex_hull(geometry)))
}

fn envelope(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Geometry(measure::envelope(geometry)))
}

fn interior_point(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Geometry(measure::interior_point(geometry)))
}

fn dimension(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Integer(measure::dimension(geometry)))
}

fn num_points(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Integer(measure::num_points(geometry)))
}

fn is_empty(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Boolean(geometry.is_empty()))
}

fn is_valid(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Boolean(measure::is_valid(geometry)))
}

fn length(geometry: &Geometry<f64>, _: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Double(measure::length(geometry)))
}

/// Distance to an empty operand is zero.
fn distance(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
	let other = geometry_arg(args, 0)?;
	Ok(Value::Double(nearest_points(geometry, other).map_or(0.0, |nearest| nearest.distance)))
}

macro_rules! predicate_methods {
	($($handler:ident => $predicate:ident),* $(,)?) => {
		$(
			fn $handler(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
				Ok(Value::Boolean(evaluate(Predicate::$predicate, geometry, geometry_arg(args, 0)?)?))
			}
		)*
	};
}

predicate_methods! {
	contains => Contains,
	contains_properly => ContainsProperly,
	covered_by => CoveredBy,
	covers => Covers,
	crosses => Crosses,
	disjoint => Disjoint,
	equals_topo => EqualsTopo,
	intersects => Intersects,
	overlaps => Overlaps,
	touches => Touches,
	within => Within,
}

macro_rules! overlay_methods {
	($($handler:ident => $op:ident),* $(,)?) => {
		$(
			fn $handler(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
				Ok(Value::Geometry(overlay(OverlayOp::$op, geometry, geometry_arg(args, 0)?)?))
			}
		)*
	};
}

overlay_methods! {
	difference => Difference,
	intersection => Intersection,
	sym_difference => SymDifference,
	union => Union,
}
