use geo::coord;

use crate::{Arity, InvokeError};

#[test]
fn unknown_operation_mentions_suggestion() {
	let err = InvokeError::UnknownOperation {
		name: "bufer".to_string(),
		suggestion: Some("buffer".to_string()),
	};
	assert_eq!(err.to_string(), "unknown operation 'bufer' (did you mean 'buffer'?)");
}

#[test]
fn validation_failure_renders_location_as_point() {
	let err = InvokeError::validation_at("buffer envelope is incorrect", coord! { x: 1.5, y: -2.0 });
	assert_eq!(err.to_string(), "buffer envelope is incorrect at POINT (1.5 -2)");
	assert_eq!(
		InvokeError::validation("expected empty buffer result").to_string(),
		"expected empty buffer result"
	);
}

#[test]
fn arity_display_and_acceptance() {
	assert_eq!(
		InvokeError::ArgumentCount {
			expected: Arity::AtLeast(1),
			got: 0
		}
		.to_string(),
		"expected at least 1 arguments, got 0"
	);
	assert!(Arity::Between(1, 3).accepts(3));
	assert!(!Arity::Exactly(1).accepts(2));
	assert_eq!(Arity::Between(1, 3).to_string(), "1 to 3");
}
