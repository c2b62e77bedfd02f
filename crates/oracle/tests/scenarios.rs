use gauge_engine::{Predicate, covers, evaluate};
use gauge_invocation::{Arity, InvokeError, RawArg, ResultValue, parse_geometry};
use gauge_oracle::{Operation, standard_chain};
use geo::{Geometry, HasDimensions};
use rstest::{fixture, rstest};

const SQUARE: &str = "POLYGON((0 0,10 0,10 10,0 10,0 0))";

#[fixture]
fn chain() -> Box<dyn Operation> {
	standard_chain().expect("builtin registry has no duplicates")
}

fn geom(text: &str) -> Geometry<f64> {
	parse_geometry(text).expect("valid wkt")
}

fn buffer_of(chain: &dyn Operation, subject: &Geometry<f64>, distance: &str) -> Geometry<f64> {
	chain
		.invoke("buffer", subject, &[RawArg::from(distance)])
		.expect("buffer validates")
		.into_geometry()
		.expect("buffer returns a geometry")
}

#[rstest]
fn positive_polygon_buffer_covers_subject(chain: Box<dyn Operation>) {
	let subject = geom(SQUARE);
	let result = buffer_of(&*chain, &subject, "2");
	assert!(covers(&result, &subject));
}

#[rstest]
#[case("LINESTRING(0 0,10 0)", "-1")]
#[case("POINT(3 3)", "-0.5")]
fn degenerate_subject_with_non_positive_distance_is_empty(
	chain: Box<dyn Operation>,
	#[case] subject: &str,
	#[case] distance: &str,
) {
	let result = buffer_of(&*chain, &geom(subject), distance);
	assert!(result.is_empty());
}

#[rstest]
fn negative_polygon_buffer_lies_inside_subject(chain: Box<dyn Operation>) {
	let subject = geom(SQUARE);
	let result = buffer_of(&*chain, &subject, "-3");
	assert!(!result.is_empty());
	assert!(covers(&subject, &result));
}

#[rstest]
fn prepared_contains_matches_plain_contains(chain: Box<dyn Operation>) {
	let outer = geom(SQUARE);
	let inner = geom("POLYGON((2 2,5 2,5 5,2 5,2 2))");

	let prepared = chain
		.invoke("contains", &outer, &[RawArg::Geometry(inner.clone())])
		.unwrap();
	assert_eq!(prepared, ResultValue::Boolean(true));
	assert_eq!(prepared.as_bool(), Some(evaluate(Predicate::Contains, &outer, &inner).unwrap()));
}

#[rstest]
fn buffer_without_distance_is_an_argument_count_error(chain: Box<dyn Operation>) {
	let err = chain.invoke("buffer", &geom(SQUARE), &[]).unwrap_err();
	assert_eq!(
		err,
		InvokeError::ArgumentCount {
			expected: Arity::AtLeast(1),
			got: 0,
		}
	);
}

#[rstest]
fn unknown_operation_is_reported(chain: Box<dyn Operation>) {
	let err = chain.invoke("unknownOp", &geom("POINT(0 0)"), &[]).unwrap_err();
	assert!(matches!(err, InvokeError::UnknownOperation { ref name, .. } if name == "unknownOp"));
	assert!(matches!(chain.return_type("unknownOp"), Err(InvokeError::UnknownOperation { .. })));
}

#[rstest]
#[case("1", "8", "1")]
#[case("1", "8", "2")]
#[case("1", "8", "3")]
#[case("0.5", "4", "1")]
fn line_buffers_with_every_end_cap_validate(
	chain: Box<dyn Operation>,
	#[case] distance: &str,
	#[case] segments: &str,
	#[case] end_cap: &str,
) {
	let line = geom("LINESTRING(0 0,10 0,10 10)");
	let args = [RawArg::from(distance), RawArg::from(segments), RawArg::from(end_cap)];
	let result = chain.invoke("buffer", &line, &args).unwrap();
	assert!(covers(result.as_geometry().unwrap(), &line));
}

#[rstest]
fn outer_links_shadow_inner_ones(chain: Box<dyn Operation>) {
	// "contains" exists in both the prepared link and the method catalog; both agree.
	let outer = geom(SQUARE);
	let touching = RawArg::from("POLYGON((0 0,4 0,4 4,0 4,0 0))");
	assert_eq!(
		chain.invoke("containsProperly", &outer, &[touching.clone()]).unwrap(),
		ResultValue::Boolean(false)
	);
	assert_eq!(chain.invoke("contains", &outer, &[touching]).unwrap(), ResultValue::Boolean(true));
}
