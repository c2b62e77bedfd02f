//! The innermost link: direct invocation of engine methods.

mod catalog;

use gauge_invocation::{Arity, InvokeError, RawArg, ResultValue, ValueType};
use gauge_registry::FunctionDescriptor;
use geo::Geometry;
use tracing::debug;

pub use catalog::METHODS;

use crate::Operation;

/// Maximum edit distance for "did you mean" suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Resolves names against the fixed engine method catalog.
///
/// Overloads share a name and differ by arity; the one matching the call's
/// argument count is invoked.
#[derive(Debug, Clone, Copy)]
pub struct MethodInvocationOperation {
	catalog: &'static [FunctionDescriptor],
}

impl Default for MethodInvocationOperation {
	fn default() -> Self {
		Self::new()
	}
}

impl MethodInvocationOperation {
	/// Creates the link over the builtin method catalog.
	pub fn new() -> Self {
		Self { catalog: METHODS }
	}

	/// Every method overload, in catalog order.
	pub fn catalog(&self) -> &'static [FunctionDescriptor] {
		self.catalog
	}

	fn overloads(&self, name: &str) -> impl Iterator<Item = &'static FunctionDescriptor> {
		self.catalog.iter().filter(move |def| def.name.eq_ignore_ascii_case(name))
	}

	fn unknown(&self, name: &str) -> InvokeError {
		let lowered = name.to_ascii_lowercase();
		let suggestion = self
			.catalog
			.iter()
			.map(|def| def.name)
			.min_by_key(|candidate| strsim::levenshtein(&lowered, &candidate.to_ascii_lowercase()))
			.filter(|candidate| strsim::levenshtein(&lowered, &candidate.to_ascii_lowercase()) <= MAX_SUGGESTION_DISTANCE)
			.map(str::to_string);
		InvokeError::UnknownOperation {
			name: name.to_string(),
			suggestion,
		}
	}
}

impl Operation for MethodInvocationOperation {
	fn return_type(&self, name: &str) -> Result<ValueType, InvokeError> {
		self.overloads(name)
			.next()
			.map(|def| def.returns)
			.ok_or_else(|| self.unknown(name))
	}

	fn invoke(&self, name: &str, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError> {
		let mut arities = self.overloads(name).map(FunctionDescriptor::arity).peekable();
		if arities.peek().is_none() {
			return Err(self.unknown(name));
		}
		let (min, max) = arities.fold((usize::MAX, 0), |(min, max), n| (min.min(n), max.max(n)));

		let Some(def) = self.overloads(name).find(|def| def.arity() == args.len()) else {
			let expected = if min == max { Arity::Exactly(min) } else { Arity::Between(min, max) };
			return Err(InvokeError::ArgumentCount {
				expected,
				got: args.len(),
			});
		};
		debug!(op = %name, args = args.len(), link = "method", "invoking engine method");
		def.invoke(geometry, args)
	}
}

#[cfg(test)]
mod tests;
