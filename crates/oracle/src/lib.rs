//! Operation dispatch and buffer verification.
//!
//! An operation chain resolves a name to behaviour through a sequence of
//! links, outermost first. Each specialised link handles a small fixed set of
//! names and forwards everything else unchanged to the link it owns; the
//! innermost link invokes the engine method catalog directly.
//!
//! The buffer link does not trust the engine. It recomputes nothing, but
//! proves the computed buffer against containment, area, envelope and
//! distance invariants before returning it.

pub mod buffer;
pub mod chain;
pub mod config;
pub mod method;
pub mod operation;
pub mod prepared;
pub mod registry_op;

pub use buffer::{BufferCorrectnessOracle, BufferInvocation, BufferValidationOperation};
pub use chain::{build_chain, standard_chain};
pub use config::{BufferOracleConfig, ChainConfig, ConfigError, LinkKind, OracleConfig};
pub use gauge_invocation::{InvokeError, RawArg, ResultValue, ValueType};
pub use method::MethodInvocationOperation;
pub use operation::Operation;
pub use prepared::PreparedGeometryOperation;
pub use registry_op::RegistryOperation;
