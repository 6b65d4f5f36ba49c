//! Panel options document.
//!
//! The host stores panel options as JSON:
//!
//! ```json
//! {
//!   "filterConfig": [
//!     { "filterKey": "labels", "valueConnectMark": "=", "optionConnectMark": ",",
//!       "valuePrefix": "\"", "valueSuffix": "\"" }
//!   ],
//!   "options": [
//!     { "label": "Pod", "value": "pod", "belongTo": ["labels"] }
//!   ]
//! }
//! ```
//!
//! The same fields are accepted from TOML (`[[filterConfig]]`, `[[options]]`).
//! Suspicious grammars are reported as [`ConfigWarning`]s rather than errors;
//! the codec works with any delimiters, ambiguous ones just decode poorly.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tagbar_codec::{FilterGrammar, FilterOption, OptionCatalog};
use thiserror::Error;

use crate::error::{ConfigError, Result};

/// Grammars and options configured for one filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelOptions {
	/// One grammar per backing variable, in configuration order.
	pub filter_config: Vec<FilterGrammar>,
	/// Selectable filter keys.
	pub options: Vec<FilterOption>,
}

/// Non-fatal configuration problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
	#[error("filter key '{0}' is configured more than once; later grammars overwrite the same variable")]
	DuplicateFilterKey(String),
	#[error("grammar '{0}' has an empty optionConnectMark; its variable holds at most one entry")]
	EmptyOptionMark(String),
	#[error("grammar '{0}' has an empty valueConnectMark; values cannot be decoded")]
	EmptyValueMark(String),
	#[error("grammar '{0}' uses the same valueConnectMark and optionConnectMark")]
	SameMarks(String),
	#[error("option '{option}' belongs to unknown filter key '{filter_key}'")]
	UnknownFilterKey { option: String, filter_key: String },
}

impl PanelOptions {
	pub fn new(filter_config: Vec<FilterGrammar>, options: Vec<FilterOption>) -> Self {
		Self { filter_config, options }
	}

	/// Parses the host's JSON options document.
	pub fn from_json_str(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Parses a TOML options document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads options from a file. `.toml` files are read as TOML, anything
	/// else as JSON. Warnings are logged.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;

		let options = if path.extension().is_some_and(|ext| ext == "toml") {
			Self::from_toml_str(&content)?
		} else {
			Self::from_json_str(&content)?
		};

		for warning in options.validate() {
			tracing::warn!(path = %path.display(), "{warning}");
		}
		tracing::debug!(
			path = %path.display(),
			grammars = options.filter_config.len(),
			options = options.options.len(),
			"loaded panel options"
		);

		Ok(options)
	}

	/// Checks the grammars and options for likely mistakes.
	pub fn validate(&self) -> Vec<ConfigWarning> {
		let mut warnings = Vec::new();
		let mut seen = FxHashSet::default();

		for grammar in &self.filter_config {
			let key = &grammar.filter_key;
			if !seen.insert(key.as_str()) {
				warnings.push(ConfigWarning::DuplicateFilterKey(key.clone()));
			}
			if grammar.option_connect_mark.is_empty() {
				warnings.push(ConfigWarning::EmptyOptionMark(key.clone()));
			}
			if grammar.value_connect_mark.is_empty() {
				warnings.push(ConfigWarning::EmptyValueMark(key.clone()));
			} else if grammar.value_connect_mark == grammar.option_connect_mark {
				warnings.push(ConfigWarning::SameMarks(key.clone()));
			}
		}

		for option in &self.options {
			for filter_key in &option.belong_to {
				if !seen.contains(filter_key.as_str()) {
					warnings.push(ConfigWarning::UnknownFilterKey {
						option: option.value.clone(),
						filter_key: filter_key.clone(),
					});
				}
			}
		}

		warnings
	}
}

impl OptionCatalog for PanelOptions {
	fn options(&self) -> &[FilterOption] {
		&self.options
	}
}

#[cfg(test)]
mod tests;
