//! Dashboard variable stores.

use indexmap::IndexMap;
use tagbar_codec::VARIABLE_PREFIX;
use url::Url;

use crate::error::StoreError;

/// Named string variables owned by the host dashboard.
///
/// Writes are partial: only the named variables change. An empty value
/// clears the variable instead of storing an empty token.
pub trait VariableStore {
	/// Current value of `name`, if set.
	fn read(&self, name: &str) -> Option<String>;

	/// Applies `updates` in one batch. `trigger_refresh` asks the host to
	/// re-run dependent queries.
	fn write(&mut self, updates: &IndexMap<String, String>, trigger_refresh: bool) -> Result<(), StoreError>;
}

/// In-memory store preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
	values: IndexMap<String, String>,
	refreshes: usize,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `name` directly, bypassing refresh accounting.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), value.into());
	}

	/// Number of writes that requested a refresh.
	pub fn refreshes(&self) -> usize {
		self.refreshes
	}
}

impl VariableStore for MemoryStore {
	fn read(&self, name: &str) -> Option<String> {
		self.values.get(name).cloned()
	}

	fn write(&mut self, updates: &IndexMap<String, String>, trigger_refresh: bool) -> Result<(), StoreError> {
		for (name, value) in updates {
			if value.is_empty() {
				self.values.shift_remove(name);
			} else {
				self.values.insert(name.clone(), value.clone());
			}
		}
		if trigger_refresh {
			self.refreshes += 1;
		}
		Ok(())
	}
}

/// Store backed by a dashboard URL's query string.
///
/// Variables are the `var-*` query parameters. Other parameters (time range,
/// org id, ...) are never touched and keep their order. An updated variable
/// keeps its position; new variables are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStore {
	url: Url,
	refreshes: usize,
}

impl QueryStore {
	pub fn new(url: Url) -> Self {
		Self { url, refreshes: 0 }
	}

	pub fn parse(input: &str) -> Result<Self, StoreError> {
		Ok(Self::new(Url::parse(input)?))
	}

	pub fn url(&self) -> &Url {
		&self.url
	}

	pub fn into_url(self) -> Url {
		self.url
	}

	/// Number of writes that requested a refresh.
	pub fn refreshes(&self) -> usize {
		self.refreshes
	}
}

impl VariableStore for QueryStore {
	fn read(&self, name: &str) -> Option<String> {
		self.url
			.query_pairs()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.into_owned())
	}

	fn write(&mut self, updates: &IndexMap<String, String>, trigger_refresh: bool) -> Result<(), StoreError> {
		if let Some(name) = updates.keys().find(|name| !name.starts_with(VARIABLE_PREFIX)) {
			return Err(StoreError::NotAVariable(name.clone()));
		}

		let mut pairs: Vec<(String, String)> = self
			.url
			.query_pairs()
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect();

		for (name, value) in updates {
			let first = pairs.iter().position(|(key, _)| key == name);
			let mut index = 0;
			pairs.retain(|(key, _)| {
				let keep = key != name || (Some(index) == first && !value.is_empty());
				index += 1;
				keep
			});
			match first {
				_ if value.is_empty() => {}
				Some(pos) => pairs[pos].1.clone_from(value),
				None => pairs.push((name.clone(), value.clone())),
			}
		}

		if pairs.is_empty() {
			self.url.set_query(None);
		} else {
			self.url.query_pairs_mut().clear().extend_pairs(&pairs);
		}

		tracing::debug!(
			variables = updates.len(),
			refresh = trigger_refresh,
			query = self.url.query().unwrap_or(""),
			"wrote dashboard variables"
		);

		if trigger_refresh {
			self.refreshes += 1;
		}
		Ok(())
	}
}
