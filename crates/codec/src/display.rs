//! Presentation of tags in the filter bar.

use crate::catalog::{OptionCatalog, label_for};
use crate::tag::{TAG_SEPARATOR, Tag};

/// Characters of a tag chip shown before it is shortened.
pub const DISPLAY_LIMIT: usize = 20;

/// Text for one tag chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDisplay {
	/// `label=value`, shown in the tooltip of a shortened chip.
	pub full: String,
	/// Chip text; equal to `full` unless shortened.
	pub short: String,
}

impl TagDisplay {
	/// Returns `true` if the chip text was shortened.
	pub fn is_truncated(&self) -> bool {
		self.full != self.short
	}
}

/// Renders `tag` with its key replaced by the catalog label.
pub fn display_tag<C: OptionCatalog + ?Sized>(catalog: &C, tag: &Tag) -> TagDisplay {
	let full = format!("{}{TAG_SEPARATOR}{}", label_for(catalog, &tag.key), tag.value);
	let short = match full.char_indices().nth(DISPLAY_LIMIT) {
		Some((cut, _)) => format!("{}...", &full[..cut]),
		None => full.clone(),
	};
	TagDisplay { full, short }
}
