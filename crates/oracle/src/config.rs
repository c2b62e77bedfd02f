//! Oracle configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard four-link chain with the stock buffer tolerances.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The file could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},

	/// The file is not valid TOML or does not match the schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A field holds a value outside its accepted range.
	#[error("invalid value for '{field}': {reason}")]
	Invalid {
		field: &'static str,
		reason: String,
	},
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OracleConfig {
	pub chain: ChainConfig,
	pub buffer: BufferOracleConfig,
}

/// A specialised chain link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
	BufferValidation,
	Prepared,
	Registry,
}

impl LinkKind {
	pub fn name(self) -> &'static str {
		match self {
			Self::BufferValidation => "buffer-validation",
			Self::Prepared => "prepared",
			Self::Registry => "registry",
		}
	}
}

/// Links of the dispatch chain, outermost first.
///
/// Method invocation is always appended as the innermost link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
	pub links: Vec<LinkKind>,
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self {
			links: vec![LinkKind::BufferValidation, LinkKind::Prepared, LinkKind::Registry],
		}
	}
}

/// Tolerances and switches of the buffer oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferOracleConfig {
	/// Allowed deviation of the buffer curve from the buffer distance, as a fraction of it.
	pub max_distance_diff_frac: f64,
	/// Envelope padding, as a fraction of the buffer distance.
	pub max_envelope_diff_frac: f64,
	/// Segment subdivision fraction for the discrete Hausdorff distance.
	pub densify_fraction: f64,
	pub check_validity: bool,
	/// Return an empty collection instead of the validated result.
	pub return_empty_collection: bool,
}

impl Default for BufferOracleConfig {
	fn default() -> Self {
		Self {
			max_distance_diff_frac: 0.012,
			max_envelope_diff_frac: 0.012,
			densify_fraction: 0.25,
			check_validity: true,
			return_empty_collection: false,
		}
	}
}

impl OracleConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates the TOML file at `path`.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&text)
	}

	/// Checks value ranges that the schema cannot express.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let buffer = &self.buffer;
		non_negative("buffer.max_distance_diff_frac", buffer.max_distance_diff_frac)?;
		non_negative("buffer.max_envelope_diff_frac", buffer.max_envelope_diff_frac)?;
		if !(buffer.densify_fraction > 0.0 && buffer.densify_fraction <= 1.0) {
			return Err(ConfigError::Invalid {
				field: "buffer.densify_fraction",
				reason: format!("{} is not in (0, 1]", buffer.densify_fraction),
			});
		}
		Ok(())
	}
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
	if value.is_finite() && value >= 0.0 {
		Ok(())
	} else {
		Err(ConfigError::Invalid {
			field,
			reason: format!("{value} is not a finite non-negative number"),
		})
	}
}
