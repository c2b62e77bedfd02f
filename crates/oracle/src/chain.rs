use std::sync::Arc;

use gauge_registry::{FunctionRegistry, RegistryError};
use tracing::debug;

use crate::config::{LinkKind, OracleConfig};
use crate::{BufferValidationOperation, MethodInvocationOperation, Operation, PreparedGeometryOperation, RegistryOperation};

/// Builds the chain described by `config`.
///
/// Links wrap each other in configuration order, outermost first, around a
/// method invocation link.
pub fn build_chain(config: &OracleConfig, registry: Arc<FunctionRegistry>) -> Box<dyn Operation> {
	let mut chain: Box<dyn Operation> = Box::new(MethodInvocationOperation::new());
	for link in config.chain.links.iter().rev() {
		chain = match link {
			LinkKind::BufferValidation => Box::new(BufferValidationOperation::new(config.buffer.clone(), chain)),
			LinkKind::Prepared => Box::new(PreparedGeometryOperation::new(chain)),
			LinkKind::Registry => Box::new(RegistryOperation::new(Arc::clone(&registry), chain)),
		};
	}
	debug!(
		links = ?config.chain.links.iter().map(|link| link.name()).collect::<Vec<_>>(),
		"operation chain built"
	);
	chain
}

/// The default chain: buffer validation, prepared predicates, builtin functions, engine methods.
pub fn standard_chain() -> Result<Box<dyn Operation>, RegistryError> {
	let registry = Arc::new(FunctionRegistry::builtins()?);
	Ok(build_chain(&OracleConfig::default(), registry))
}
