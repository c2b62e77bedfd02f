use thiserror::Error;

/// Errors raised when an engine capability rejects its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
	/// The capability is only defined for areal operands.
	#[error("{op} requires areal operands, got {kind}")]
	NonAreal {
		/// Capability name.
		op: &'static str,
		/// WKT type of the offending operand.
		kind: &'static str,
	},

	/// The capability is not defined for this geometry type.
	#[error("{op} is not supported for {kind}")]
	Unsupported {
		/// Capability name.
		op: &'static str,
		/// WKT type of the offending operand.
		kind: &'static str,
	},

	/// A DE-9IM pattern was rejected by the matrix matcher.
	#[error("invalid relate pattern {pattern:?}: {reason}")]
	RelatePattern {
		/// The pattern that failed to parse.
		pattern: &'static str,
		/// Matcher diagnostic.
		reason: String,
	},
}
