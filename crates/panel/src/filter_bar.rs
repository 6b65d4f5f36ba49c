//! Filter bar controller.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tagbar_codec::{FilterGrammar, OptionIndex, Tag, TagDisplay, decode, display_tag, encode};

use crate::config::PanelOptions;
use crate::error::StoreError;
use crate::state::{TagAction, reduce};
use crate::store::VariableStore;

/// Decodes the tags held by every grammar's variable, in grammar order.
///
/// Unset or empty variables contribute nothing. A tag whose option belongs to
/// several grammars is stored in each of their variables; only its first
/// occurrence is kept.
pub fn decode_all<S: VariableStore + ?Sized>(grammars: &[FilterGrammar], store: &S) -> Vec<Tag> {
	let mut seen = FxHashSet::default();
	let mut tags = Vec::new();
	for grammar in grammars {
		let raw = store.read(&grammar.variable_name());
		for tag in decode(grammar, raw.as_deref()) {
			if seen.insert(tag.clone()) {
				tags.push(tag);
			}
		}
	}
	tags
}

/// Current tags of one filter bar plus the configuration needed to persist
/// them.
///
/// Every effective action re-encodes all grammars and writes them to the
/// store in a single batch. A failed write leaves the new tags in place.
#[derive(Debug, Clone)]
pub struct FilterBar {
	options: PanelOptions,
	index: OptionIndex,
	tags: Vec<Tag>,
}

impl FilterBar {
	/// Creates an empty filter bar.
	pub fn new(options: PanelOptions) -> Self {
		let index = OptionIndex::build(&options);
		Self {
			options,
			index,
			tags: Vec::new(),
		}
	}

	/// Creates a filter bar with tags decoded from `store`.
	pub fn load<S: VariableStore + ?Sized>(options: PanelOptions, store: &S) -> Self {
		let mut bar = Self::new(options);
		bar.tags = decode_all(&bar.options.filter_config, store);
		tracing::debug!(
			tags = bar.tags.len(),
			grammars = bar.options.filter_config.len(),
			"loaded filter bar"
		);
		bar
	}

	pub fn tags(&self) -> &[Tag] {
		&self.tags
	}

	/// Chip text for each tag, in order.
	pub fn displays(&self) -> impl Iterator<Item = TagDisplay> + '_ {
		self.tags.iter().map(|tag| display_tag(&self.options, tag))
	}

	/// Encoded value of every grammar's variable, keyed by variable name.
	pub fn variables(&self) -> IndexMap<String, String> {
		encode(&self.options.filter_config, &self.index, &self.tags)
			.into_iter()
			.map(|(filter_key, value)| (tagbar_codec::variable_name(&filter_key), value))
			.collect()
	}

	/// Applies `action` and persists the result.
	///
	/// Returns `Ok(false)` without writing when the action leaves the tags
	/// unchanged.
	pub fn apply<S: VariableStore + ?Sized>(&mut self, action: TagAction, store: &mut S) -> Result<bool, StoreError> {
		let next = reduce(&self.tags, action);
		if next == self.tags {
			return Ok(false);
		}
		self.tags = next;
		self.persist(store)?;
		Ok(true)
	}

	/// Writes every grammar's variable to `store` and requests a refresh.
	pub fn persist<S: VariableStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
		let variables = self.variables();
		tracing::debug!(tags = self.tags.len(), variables = variables.len(), "persisting filter bar");
		store.write(&variables, true)
	}
}
