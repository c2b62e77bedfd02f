use std::sync::Arc;

use gauge_invocation::{InvokeError, RawArg, ResultValue, ValueType};
use gauge_registry::FunctionRegistry;
use geo::Geometry;
use tracing::{debug, trace};

use crate::Operation;

/// Dispatches to registered extension functions by `(name, arity)`.
///
/// A miss forwards to the fallback, so registry functions shadow engine
/// methods only for the arities they declare.
pub struct RegistryOperation {
	registry: Arc<FunctionRegistry>,
	fallback: Box<dyn Operation>,
}

impl RegistryOperation {
	pub fn new(registry: Arc<FunctionRegistry>, fallback: Box<dyn Operation>) -> Self {
		Self { registry, fallback }
	}

	pub fn registry(&self) -> &FunctionRegistry {
		&self.registry
	}
}

impl Operation for RegistryOperation {
	fn return_type(&self, name: &str) -> Result<ValueType, InvokeError> {
		match self.registry.find_any(name) {
			Some(def) => Ok(def.returns),
			None => self.fallback.return_type(name),
		}
	}

	fn invoke(&self, name: &str, geometry: &Geometry<f64>, args: &[RawArg]) -> Result<ResultValue, InvokeError> {
		match self.registry.find(name, args.len()) {
			Some(def) => {
				debug!(op = %name, args = args.len(), link = "registry", "invoking registered function");
				def.invoke(geometry, args)
			}
			None => {
				trace!(op = %name, args = args.len(), link = "registry", "forwarding");
				self.fallback.invoke(name, geometry, args)
			}
		}
	}
}
