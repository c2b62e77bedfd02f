//! Registry of extension functions.
//!
//! Functions are static [`FunctionDescriptor`]s declared with [`function!`]
//! and collected at link time through `inventory`. A [`FunctionRegistry`] is
//! built once and is read-only afterwards, so it can be shared freely.

#[macro_use]
mod macros;
mod builtins;
mod descriptor;
mod registry;

#[doc(hidden)]
pub use inventory;

pub use descriptor::{FunctionDescriptor, FunctionHandler};
pub use gauge_invocation::ValueType;
pub use registry::{FunctionReg, FunctionRegistry, FunctionRegistryBuilder, RegistryError};
