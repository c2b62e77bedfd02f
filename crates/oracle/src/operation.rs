use gauge_invocation::{InvokeError, RawArg, ResultValue, ValueType};
use geo::Geometry;

/// A link of the dispatch chain.
///
/// A link either handles `name` itself or forwards the call, unchanged, to the
/// link it owns. Links hold no per-call state, so a chain can be shared across
/// threads.
pub trait Operation: Send + Sync {
	/// Declared result type of `name`, resolved in the same order as [`Operation::invoke`].
	fn return_type(&self, name: &str) -> Result<ValueType, InvokeError>;

	/// Runs `name` on `geometry` with untyped `args`.
	fn invoke(&self, name: &str, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError>;
}

impl<T: Operation + ?Sized> Operation for Box<T> {
	fn return_type(&self, name: &str) -> Result<ValueType, InvokeError> {
		(**self).return_type(name)
	}

	fn invoke(&self, name: &str, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError> {
		(**self).invoke(name, geometry, args)
	}
}

/// Case-insensitive membership test against a link's fixed name set.
pub(crate) fn name_matches(name: &str, names: &[&str]) -> bool {
	names.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}
