//! Tag list transitions.

use tagbar_codec::Tag;

/// A user edit to the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAction {
	/// Append a tag. Ignored when the value is empty or the tag already exists.
	Add(Tag),
	/// Replace the tag at `index`. Ignored when out of range.
	Edit { index: usize, tag: Tag },
	/// Remove every tag equal to this one.
	Remove(Tag),
}

impl TagAction {
	pub fn add(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Add(Tag::new(key, value))
	}

	pub fn edit(index: usize, key: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Edit {
			index,
			tag: Tag::new(key, value),
		}
	}

	pub fn remove(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Remove(Tag::new(key, value))
	}
}

/// Applies `action` to `tags`, returning the new list.
pub fn reduce(tags: &[Tag], action: TagAction) -> Vec<Tag> {
	let mut next = tags.to_vec();
	match action {
		TagAction::Add(tag) => {
			if !tag.value.is_empty() && !next.contains(&tag) {
				next.push(tag);
			}
		}
		TagAction::Edit { index, tag } => {
			if let Some(slot) = next.get_mut(index) {
				*slot = tag;
			}
		}
		TagAction::Remove(tag) => next.retain(|t| *t != tag),
	}
	next
}
