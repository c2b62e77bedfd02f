use gauge_engine::{Predicate, evaluate_prepared};
use gauge_invocation::{Arity, InvokeError, RawArg, ResultValue, ValueType, convert_at, geometry_arg};
use geo::Geometry;
use tracing::{debug, trace};

use crate::Operation;
use crate::operation::name_matches;

/// Predicates answered through a prepared form of the subject.
const NAMES: &[&str] = &["intersects", "contains", "containsProperly", "covers"];

/// Evaluates binary predicates against a prepared (indexed) subject.
///
/// The prepared form is rebuilt on every call, so results exercise the prepared
/// code path without caching across calls.
pub struct PreparedGeometryOperation {
	fallback: Box<dyn Operation>,
}

impl PreparedGeometryOperation {
	pub fn new(fallback: Box<dyn Operation>) -> Self {
		Self { fallback }
	}

	fn predicate(name: &str) -> Option<Predicate> {
		if name_matches(name, NAMES) {
			Predicate::from_name(name)
		} else {
			None
		}
	}
}

impl Operation for PreparedGeometryOperation {
	fn return_type(&self, name: &str) -> Result<ValueType, InvokeError> {
		match Self::predicate(name) {
			Some(_) => Ok(ValueType::Boolean),
			None => self.fallback.return_type(name),
		}
	}

	fn invoke(&self, name: &str, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError> {
		let Some(predicate) = Self::predicate(name) else {
			trace!(op = %name, link = "prepared", "forwarding");
			return self.fallback.invoke(name, geometry, args);
		};
		let [arg] = args else {
			return Err(InvokeError::ArgumentCount {
				expected: Arity::Exactly(1),
				got: args.len(),
			});
		};
		let other = [convert_at(0, ValueType::Geometry, arg)?];
		debug!(op = predicate.name(), link = "prepared", "evaluating prepared predicate");
		let holds = evaluate_prepared(predicate, geometry, geometry_arg(&other, 0)?)?;
		Ok(ResultValue::Boolean(holds))
	}
}

#[cfg(test)]
mod tests;
