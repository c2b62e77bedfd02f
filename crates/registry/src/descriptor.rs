use std::fmt;

use gauge_invocation::{InvokeError, RawArg, ResultValue, Value, ValueType, convert};
use geo::Geometry;

/// Handler of a registered function. The subject geometry is the implicit first operand.
pub type FunctionHandler = fn(&Geometry<f64>, &[Value]) -> Result<Value, InvokeError>;

/// Static definition of a callable function.
#[derive(Clone, Copy)]
pub struct FunctionDescriptor {
	/// Name used for lookup (compared case-insensitively).
	pub name: &'static str,
	/// Declared parameter types, excluding the subject.
	pub params: &'static [ValueType],
	/// Declared return type.
	pub returns: ValueType,
	/// One-line description.
	pub description: &'static str,
	pub handler: FunctionHandler,
}

impl FunctionDescriptor {
	/// Number of arguments after the subject.
	pub fn arity(&self) -> usize {
		self.params.len()
	}

	/// Converts `args`, calls the handler and tags its value with the declared return type.
	pub fn invoke(&self, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError> {
		if !self.returns.is_result_type() {
			return Err(InvokeError::UnsupportedReturnType { ty: self.returns });
		}
		let values = convert(self.params, args)?;
		let value = (self.handler)(geometry, &values)?;
		ResultValue::wrap(self.returns, value)
	}

	/// Renders `name(param, ...) -> returns`.
	pub fn signature(&self) -> String {
		let params: Vec<&str> = self.params.iter().map(|ty| ty.name()).collect();
		format!("{}({}) -> {}", self.name, params.join(", "), self.returns)
	}
}

impl fmt::Debug for FunctionDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionDescriptor")
			.field("name", &self.name)
			.field("params", &self.params)
			.field("returns", &self.returns)
			.finish_non_exhaustive()
	}
}
