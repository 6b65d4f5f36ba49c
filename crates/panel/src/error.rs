//! Error types for panel configuration and variable stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading panel options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a panel options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The JSON options document is malformed.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The TOML options document is malformed.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors reported by a [`crate::VariableStore`].
///
/// Recoverable: the filter bar keeps its new tags, but the store stays stale
/// until the caller resyncs it with [`crate::FilterBar::persist`].
#[derive(Debug, Error)]
pub enum StoreError {
	/// The dashboard URL could not be parsed.
	#[error("invalid dashboard URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	/// The store only backs dashboard variables.
	#[error("'{0}' is not a dashboard variable (expected a 'var-' prefix)")]
	NotAVariable(String),
}
