//! Verified buffering.

mod distance;
mod invocation;
mod oracle;

use gauge_engine::empty_collection;
use gauge_invocation::{InvokeError, RawArg, ResultValue, ValueType};
use geo::Geometry;
use tracing::{debug, trace, warn};

pub use invocation::BufferInvocation;
pub use oracle::BufferCorrectnessOracle;

use crate::Operation;
use crate::config::BufferOracleConfig;
use crate::operation::name_matches;

const NAMES: &[&str] = &["buffer"];

/// Computes buffers through the engine and proves each result before returning it.
pub struct BufferValidationOperation {
	oracle: BufferCorrectnessOracle,
	fallback: Box<dyn Operation>,
}

impl BufferValidationOperation {
	pub fn new(config: BufferOracleConfig, fallback: Box<dyn Operation>) -> Self {
		Self {
			oracle: BufferCorrectnessOracle::new(config),
			fallback,
		}
	}

	pub fn oracle(&self) -> &BufferCorrectnessOracle {
		&self.oracle
	}
}

impl Operation for BufferValidationOperation {
	fn return_type(&self, name: &str) -> Result<ValueType, InvokeError> {
		if name_matches(name, NAMES) {
			Ok(ValueType::Geometry)
		} else {
			self.fallback.return_type(name)
		}
	}

	fn invoke(&self, name: &str, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError> {
		if !name_matches(name, NAMES) {
			trace!(op = %name, link = "buffer-validation", "forwarding");
			return self.fallback.invoke(name, geometry, args);
		}

		let invocation = BufferInvocation::parse(args)?;
		if invocation.arg_count > 3 {
			debug!(ignored = invocation.arg_count - 3, "extra buffer arguments ignored");
		}
		let params = invocation.params();
		let result = gauge_engine::buffer(geometry, &params);

		if let Err(err) = self.oracle.validate(geometry, &params, &result) {
			warn!(distance = invocation.distance, error = %err, "buffer result failed validation");
			return Err(err);
		}
		debug!(distance = invocation.distance, link = "buffer-validation", "buffer result validated");

		if self.oracle.config().return_empty_collection {
			Ok(ResultValue::Geometry(empty_collection()))
		} else {
			Ok(ResultValue::Geometry(result))
		}
	}
}
