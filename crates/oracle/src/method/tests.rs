use gauge_invocation::{Arity, InvokeError, RawArg, ResultValue, ValueType, parse_geometry};
use pretty_assertions::assert_eq;

use super::{METHODS, MethodInvocationOperation};
use crate::Operation;

fn square() -> geo::Geometry<f64> {
	parse_geometry("POLYGON((0 0,10 0,10 10,0 10,0 0))").unwrap()
}

#[test]
fn resolves_names_ignoring_case() {
	let op = MethodInvocationOperation::new();
	assert_eq!(op.invoke("AREA", &square(), &[]).unwrap(), ResultValue::Double(100.0));
	assert_eq!(op.return_type("isempty").unwrap(), ValueType::Boolean);
}

#[test]
fn picks_overload_by_argument_count() {
	let op = MethodInvocationOperation::new();
	let args = [RawArg::from("1"), RawArg::from("4"), RawArg::from("2")];
	let result = op.invoke("buffer", &square(), &args).unwrap();
	assert!(matches!(result, ResultValue::Geometry(_)));
}

#[test]
fn wrong_arity_reports_accepted_range() {
	let op = MethodInvocationOperation::new();
	let err = op.invoke("buffer", &square(), &[]).unwrap_err();
	assert_eq!(
		err,
		InvokeError::ArgumentCount {
			expected: Arity::Between(1, 3),
			got: 0,
		}
	);

	let err = op.invoke("area", &square(), &[RawArg::from("1")]).unwrap_err();
	assert_eq!(
		err,
		InvokeError::ArgumentCount {
			expected: Arity::Exactly(0),
			got: 1,
		}
	);
}

#[test]
fn unknown_name_suggests_closest_method() {
	let op = MethodInvocationOperation::new();
	let err = op.invoke("bufer", &square(), &[]).unwrap_err();
	assert_eq!(
		err,
		InvokeError::UnknownOperation {
			name: "bufer".to_string(),
			suggestion: Some("buffer".to_string()),
		}
	);

	let err = op.return_type("frobnicateEverything").unwrap_err();
	assert!(matches!(err, InvokeError::UnknownOperation { suggestion: None, .. }));
}

#[test]
fn predicates_take_geometry_argument() {
	let op = MethodInvocationOperation::new();
	let inside = RawArg::from("POINT(5 5)");
	assert_eq!(
		op.invoke("contains", &square(), &[inside]).unwrap(),
		ResultValue::Boolean(true)
	);
	let far = RawArg::from(parse_geometry("POINT(50 50)").unwrap());
	assert_eq!(op.invoke("disjoint", &square(), &[far]).unwrap(), ResultValue::Boolean(true));
}

#[test]
fn distance_and_measures() {
	let op = MethodInvocationOperation::new();
	let point = RawArg::from("POINT(13 14)");
	assert_eq!(op.invoke("distance", &square(), &[point]).unwrap(), ResultValue::Double(5.0));
	assert_eq!(op.invoke("length", &square(), &[]).unwrap(), ResultValue::Double(40.0));
	assert_eq!(op.invoke("dimension", &square(), &[]).unwrap(), ResultValue::Integer(2));
	assert_eq!(op.invoke("numPoints", &square(), &[]).unwrap(), ResultValue::Integer(5));
}

#[test]
fn overlay_of_non_areal_operand_is_an_engine_error() {
	let op = MethodInvocationOperation::new();
	let err = op
		.invoke("union", &square(), &[RawArg::from("LINESTRING(0 0,1 1)")])
		.unwrap_err();
	assert!(matches!(err, InvokeError::Engine(_)));
}

#[test]
fn catalog_declares_only_representable_results() {
	assert!(METHODS.iter().all(|def| def.returns.is_result_type()));
}
