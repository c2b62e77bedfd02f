use std::fmt;

use gauge_engine::EngineError;
use geo::Coord;
use thiserror::Error;

use crate::ValueType;

/// Number of arguments an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	Exactly(usize),
	AtLeast(usize),
	/// Inclusive range of accepted counts.
	Between(usize, usize),
}

impl Arity {
	/// Returns true when `count` arguments are acceptable.
	pub fn accepts(self, count: usize) -> bool {
		match self {
			Self::Exactly(n) => count == n,
			Self::AtLeast(n) => count >= n,
			Self::Between(min, max) => (min..=max).contains(&count),
		}
	}
}

impl fmt::Display for Arity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exactly(n) => write!(f, "{n}"),
			Self::AtLeast(n) => write!(f, "at least {n}"),
			Self::Between(min, max) => write!(f, "{min} to {max}"),
		}
	}
}

/// Errors terminating a single `invoke` call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
	/// No link of the chain recognises the operation name.
	#[error("unknown operation '{name}'{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownOperation {
		/// The name as requested.
		name: String,
		/// Closest known name, if one is close enough.
		suggestion: Option<String>,
	},

	/// The operation exists but not for this many arguments.
	#[error("expected {expected} arguments, got {got}")]
	ArgumentCount {
		expected: Arity,
		got: usize,
	},

	/// A raw argument could not be converted to its declared type.
	#[error(
		"argument {index}{}{}: {reason}",
		declared.map(|ty| format!(" ({ty})")).unwrap_or_default(),
		raw.as_ref().map(|raw| format!(" '{raw}'")).unwrap_or_default()
	)]
	ArgumentConversion {
		/// Zero-based position of the offending argument.
		index: usize,
		/// Declared type at that position, absent when too many arguments were given.
		declared: Option<ValueType>,
		/// Raw value at that position, absent when too few arguments were given.
		raw: Option<String>,
		reason: String,
	},

	/// The declared return type cannot be carried by a result.
	#[error("unsupported return type: {ty}")]
	UnsupportedReturnType {
		ty: ValueType,
	},

	/// A handler returned a value of a type other than the declared one.
	#[error("declared return type {declared}, handler produced {actual}")]
	ReturnTypeMismatch {
		declared: ValueType,
		actual: ValueType,
	},

	/// WKT text could not be parsed into a geometry.
	#[error("invalid WKT: {reason}")]
	Wkt {
		reason: String,
	},

	/// The buffer oracle rejected a computed result.
	#[error("{message}{}", location.map(|c| format!(" at POINT ({} {})", c.x, c.y)).unwrap_or_default())]
	ValidationFailed {
		message: String,
		/// Coordinate where the violation was detected, when known.
		location: Option<Coord<f64>>,
	},

	/// An engine capability rejected its input.
	#[error(transparent)]
	Engine(#[from] EngineError),
}

impl InvokeError {
	/// Creates a validation failure without a location.
	pub fn validation(message: impl Into<String>) -> Self {
		Self::ValidationFailed {
			message: message.into(),
			location: None,
		}
	}

	/// Creates a validation failure at `location`.
	pub fn validation_at(message: impl Into<String>, location: Coord<f64>) -> Self {
		Self::ValidationFailed {
			message: message.into(),
			location: Some(location),
		}
	}
}

#[cfg(test)]
mod tests;
