//! Canonical invocation types shared by every link of an operation chain.
//!
//! Callers hand the chain untyped [`RawArg`]s. Each operation converts them
//! against its declared parameter [`ValueType`]s into typed [`Value`]s, runs,
//! and wraps whatever it produced into a [`ResultValue`] whose tag matches the
//! declared return type.

/// Positional argument conversion.
pub mod convert;
/// Invocation errors.
pub mod error;
/// Raw arguments, typed values and tagged results.
pub mod value;

pub use convert::{
	convert, convert_at, convert_one, double_arg, end_cap_arg, geometry_arg, integer_arg, parse_bool, parse_end_cap,
	parse_geometry,
};
pub use error::{Arity, InvokeError};
pub use value::{RawArg, ResultValue, Value, ValueType};
