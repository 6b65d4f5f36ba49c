//! Option catalog access and the grammar membership index.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::grammar::FilterOption;

/// Source of the operator-configured filter options.
pub trait OptionCatalog {
	/// All options, in configuration order.
	fn options(&self) -> &[FilterOption];
}

impl OptionCatalog for [FilterOption] {
	fn options(&self) -> &[FilterOption] {
		self
	}
}

impl OptionCatalog for Vec<FilterOption> {
	fn options(&self) -> &[FilterOption] {
		self
	}
}

impl<T: OptionCatalog + ?Sized> OptionCatalog for &T {
	fn options(&self) -> &[FilterOption] {
		(**self).options()
	}
}

/// Option values recognized under each filter key.
///
/// Built once per catalog so encoding does not rescan the option list for
/// every tag.
#[derive(Debug, Clone, Default)]
pub struct OptionIndex {
	by_grammar: FxHashMap<String, FxHashSet<String>>,
}

impl OptionIndex {
	pub fn build<C: OptionCatalog + ?Sized>(catalog: &C) -> Self {
		let mut by_grammar: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
		for option in catalog.options() {
			for filter_key in &option.belong_to {
				by_grammar
					.entry(filter_key.clone())
					.or_default()
					.insert(option.value.clone());
			}
		}
		Self { by_grammar }
	}

	/// Returns `true` if some option with value `key` belongs to `filter_key`.
	pub fn recognizes(&self, filter_key: &str, key: &str) -> bool {
		self.by_grammar
			.get(filter_key)
			.is_some_and(|keys| keys.contains(key))
	}
}

/// Display label for `key`, falling back to `key` itself.
///
/// Presentation only; labels never reach a variable.
pub fn label_for<'a, C: OptionCatalog + ?Sized>(catalog: &'a C, key: &'a str) -> &'a str {
	catalog
		.options()
		.iter()
		.find(|option| option.value == key)
		.map_or(key, |option| option.label.as_str())
}
