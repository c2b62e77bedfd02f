use gauge_invocation::{Arity, InvokeError, RawArg, ResultValue, ValueType, parse_geometry};
use pretty_assertions::assert_eq;

use super::PreparedGeometryOperation;
use crate::{MethodInvocationOperation, Operation};

fn link() -> PreparedGeometryOperation {
	PreparedGeometryOperation::new(Box::new(MethodInvocationOperation::new()))
}

fn square() -> geo::Geometry<f64> {
	parse_geometry("POLYGON((0 0,10 0,10 10,0 10,0 0))").unwrap()
}

#[test]
fn handles_its_predicates_ignoring_case() {
	let result = link()
		.invoke("CONTAINSPROPERLY", &square(), &[RawArg::from("POINT(5 5)")])
		.unwrap();
	assert_eq!(result, ResultValue::Boolean(true));
	assert_eq!(link().return_type("covers").unwrap(), ValueType::Boolean);
}

#[test]
fn requires_exactly_one_argument() {
	let err = link().invoke("intersects", &square(), &[]).unwrap_err();
	assert_eq!(
		err,
		InvokeError::ArgumentCount {
			expected: Arity::Exactly(1),
			got: 0,
		}
	);
}

#[test]
fn rejects_non_geometry_argument() {
	let err = link()
		.invoke("contains", &square(), &[RawArg::Number(1.0)])
		.unwrap_err();
	assert!(matches!(err, InvokeError::ArgumentConversion { index: 0, .. }));
}

#[test]
fn forwards_other_names() {
	assert_eq!(link().invoke("area", &square(), &[]).unwrap(), ResultValue::Double(100.0));
	assert_eq!(link().return_type("within").unwrap(), ValueType::Boolean);
	assert_eq!(link().return_type("boundary").unwrap(), ValueType::Geometry);
}
