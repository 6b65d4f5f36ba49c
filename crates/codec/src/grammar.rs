//! Operator-authored filter configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix the host dashboard puts in front of variable names in query params.
pub const VARIABLE_PREFIX: &str = "var-";

/// Returns the host variable name backing `filter_key`.
pub fn variable_name(filter_key: &str) -> String {
	format!("{VARIABLE_PREFIX}{filter_key}")
}

/// Delimiter scheme for one dashboard variable.
///
/// Every field may be empty. Fields missing from a configuration document
/// deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterGrammar {
	/// Identifier of the variable this grammar serializes into.
	pub filter_key: String,
	/// Literal written before every key.
	pub key_prefix: String,
	/// Literal written after every key.
	pub key_suffix: String,
	/// Literal written before every value.
	pub value_prefix: String,
	/// Literal written after every value.
	pub value_suffix: String,
	/// Separator between a key and its value inside one entry.
	pub value_connect_mark: String,
	/// Separator between entries.
	pub option_connect_mark: String,
}

impl FilterGrammar {
	/// Creates an undecorated grammar using `=` between key and value and `&`
	/// between entries.
	pub fn new(filter_key: impl Into<String>) -> Self {
		Self {
			filter_key: filter_key.into(),
			value_connect_mark: "=".into(),
			option_connect_mark: "&".into(),
			..Self::default()
		}
	}

	/// Sets the literals wrapping each key.
	pub fn with_key_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		self.key_prefix = prefix.into();
		self.key_suffix = suffix.into();
		self
	}

	/// Sets the literals wrapping each value.
	pub fn with_value_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		self.value_prefix = prefix.into();
		self.value_suffix = suffix.into();
		self
	}

	/// Sets the key/value and entry separators.
	pub fn with_marks(mut self, value_connect: impl Into<String>, option_connect: impl Into<String>) -> Self {
		self.value_connect_mark = value_connect.into();
		self.option_connect_mark = option_connect.into();
		self
	}

	/// Name of the host variable this grammar reads and writes.
	pub fn variable_name(&self) -> String {
		variable_name(&self.filter_key)
	}

	/// Builds the serialized literal for one entry.
	pub fn entry(&self, key: &str, value: &str) -> String {
		let mut out = String::with_capacity(
			self.key_prefix.len()
				+ key.len() + self.key_suffix.len()
				+ self.value_connect_mark.len()
				+ self.value_prefix.len()
				+ value.len() + self.value_suffix.len(),
		);
		out.push_str(&self.key_prefix);
		out.push_str(key);
		out.push_str(&self.key_suffix);
		out.push_str(&self.value_connect_mark);
		out.push_str(&self.value_prefix);
		out.push_str(value);
		out.push_str(&self.value_suffix);
		out
	}
}

/// A selectable filter key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOption {
	/// Display text.
	pub label: String,
	/// Raw key token written into variables.
	pub value: String,
	/// Filter keys of the grammars this option is valid under.
	#[serde(deserialize_with = "deserialize_belong_to")]
	pub belong_to: Vec<String>,
	/// Editor UI expansion state. Not used by the codec.
	pub is_open: bool,
}

impl FilterOption {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			..Self::default()
		}
	}

	/// Adds `filter_key` to the grammars this option belongs to.
	pub fn belonging_to(mut self, filter_key: impl Into<String>) -> Self {
		self.belong_to.push(filter_key.into());
		self
	}
}

/// Grammar reference as written by the option editor: either the bare filter
/// key or the `{ label, value }` object emitted by a select widget.
#[derive(Deserialize)]
#[serde(untagged)]
enum GrammarRef {
	Key(String),
	Select { value: String },
}

fn deserialize_belong_to<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let refs = Option::<Vec<GrammarRef>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(refs
		.into_iter()
		.map(|r| match r {
			GrammarRef::Key(key) | GrammarRef::Select { value: key } => key,
		})
		.collect())
}
