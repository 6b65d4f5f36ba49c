use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between key and value in a tag's display form.
///
/// Independent of any grammar's `value_connect_mark`.
pub const TAG_SEPARATOR: char = '=';

/// One decoded filter entry, as edited by the user.
///
/// `key` is always the raw option value, never its label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
	pub key: String,
	pub value: String,
}

impl Tag {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{TAG_SEPARATOR}{}", self.key, self.value)
	}
}

/// Splits on the first `=`. A missing separator yields an empty value.
impl FromStr for Tag {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (key, value) = s.split_once(TAG_SEPARATOR).unwrap_or((s, ""));
		Ok(Self::new(key, value))
	}
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
	fn from((key, value): (K, V)) -> Self {
		Self::new(key, value)
	}
}
