//! Conversion and measurement functions available to every registry.

use gauge_engine::{atomic_components, linear_components};
use gauge_invocation::{InvokeError, Value, geometry_arg};
use geo::{CoordsIter, Geometry, GeometryCollection, HausdorffDistance, MultiLineString, MultiPoint, Point};

function!(TO_POINTS, "toPoints", {
	params: [],
	returns: Geometry,
	description: "All vertices as a MultiPoint"
}, handler: to_points);

function!(TO_POINTS_WITH, "toPoints", {
	params: [Geometry],
	returns: Geometry,
	description: "All vertices of both geometries as a MultiPoint"
}, handler: to_points);

function!(TO_LINES, "toLines", {
	params: [],
	returns: Geometry,
	description: "All linear components, rings included, as a MultiLineString"
}, handler: to_lines);

function!(TO_LINES_WITH, "toLines", {
	params: [Geometry],
	returns: Geometry,
	description: "All linear components of both geometries as a MultiLineString"
}, handler: to_lines);

function!(TO_GEOMETRY_COLLECTION, "toGeometryCollection", {
	params: [],
	returns: Geometry,
	description: "Atomic components as a flat GeometryCollection"
}, handler: to_geometry_collection);

function!(TO_GEOMETRY_COLLECTION_WITH, "toGeometryCollection", {
	params: [Geometry],
	returns: Geometry,
	description: "Atomic components of both geometries as a flat GeometryCollection"
}, handler: to_geometry_collection);

function!(HAUSDORFF_DISTANCE, "hausdorffDistance", {
	params: [Geometry],
	returns: Double,
	description: "Discrete Hausdorff distance between the vertex sets"
}, handler: hausdorff_distance);

function!(NUM_GEOMETRIES, "numGeometries", {
	params: [],
	returns: Integer,
	description: "Number of atomic component geometries"
}, handler: num_geometries);

/// The subject followed by an optional second geometry argument.
fn operands<'a>(geometry: &'a Geometry<f64>, args: &'a [Value]) -> Result<Vec<&'a Geometry<f64>>, InvokeError> {
	let mut out = vec![geometry];
	if !args.is_empty() {
		out.push(geometry_arg(args, 0)?);
	}
	Ok(out)
}

fn to_points(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
	let points: MultiPoint<f64> = operands(geometry, args)?
		.into_iter()
		.flat_map(|g| g.coords_iter())
		.map(Point::from)
		.collect();
	Ok(Value::Geometry(Geometry::MultiPoint(points)))
}

fn to_lines(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
	let lines: Vec<_> = operands(geometry, args)?
		.into_iter()
		.flat_map(linear_components)
		.collect();
	Ok(Value::Geometry(Geometry::MultiLineString(MultiLineString::new(lines))))
}

fn to_geometry_collection(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
	let atoms: Vec<_> = operands(geometry, args)?
		.into_iter()
		.flat_map(atomic_components)
		.collect();
	Ok(Value::Geometry(Geometry::GeometryCollection(GeometryCollection(atoms))))
}

fn hausdorff_distance(geometry: &Geometry<f64>, args: &[Value]) -> Result<Value, InvokeError> {
	let other = geometry_arg(args, 0)?;
	Ok(Value::Double(geometry.hausdorff_distance(other)))
}

fn num_geometries(geometry: &Geometry<f64>, _args: &[Value]) -> Result<Value, InvokeError> {
	Ok(Value::Integer(atomic_components(geometry).len() as i64))
}
