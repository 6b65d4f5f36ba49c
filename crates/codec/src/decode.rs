use std::iter::FusedIterator;

use crate::grammar::FilterGrammar;
use crate::tag::Tag;

/// Decodes a variable's raw value into tags under `grammar`.
///
/// An absent or empty value yields no tags. The returned iterator is lazy and
/// borrows its input; clone it to restart.
pub fn decode<'a>(grammar: &'a FilterGrammar, raw: Option<&'a str>) -> Entries<'a> {
	Entries {
		grammar,
		rest: raw.filter(|raw| !raw.is_empty()),
	}
}

/// Decodes a single entry literal.
///
/// Strips the key prefix and value suffix from the ends of the entry, splits
/// once on the first `value_connect_mark`, then strips the key suffix and
/// value prefix from the inner ends. Each strip is a no-op when the literal is
/// absent. Without a separator the whole entry is the key and the value is
/// empty.
pub fn decode_entry(grammar: &FilterGrammar, entry: &str) -> Tag {
	let entry = strip_prefix_once(entry, &grammar.key_prefix);
	let entry = strip_suffix_once(entry, &grammar.value_suffix);

	let mark = grammar.value_connect_mark.as_str();
	let (key, value) = if mark.is_empty() {
		(entry, "")
	} else {
		entry.split_once(mark).unwrap_or((entry, ""))
	};

	Tag::new(
		strip_suffix_once(key, &grammar.key_suffix),
		strip_prefix_once(value, &grammar.value_prefix),
	)
}

fn strip_prefix_once<'s>(s: &'s str, prefix: &str) -> &'s str {
	s.strip_prefix(prefix).unwrap_or(s)
}

fn strip_suffix_once<'s>(s: &'s str, suffix: &str) -> &'s str {
	s.strip_suffix(suffix).unwrap_or(s)
}

/// Lazy iterator over the tags of one variable value.
///
/// Entries are split on the grammar's `option_connect_mark` in order. Empty
/// entries are skipped. An empty `option_connect_mark` treats the whole value
/// as one entry.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
	grammar: &'a FilterGrammar,
	rest: Option<&'a str>,
}

impl Iterator for Entries<'_> {
	type Item = Tag;

	fn next(&mut self) -> Option<Tag> {
		loop {
			let rest = self.rest?;
			let mark = self.grammar.option_connect_mark.as_str();
			let entry = match (!mark.is_empty()).then(|| rest.split_once(mark)).flatten() {
				Some((entry, tail)) => {
					self.rest = Some(tail);
					entry
				}
				None => {
					self.rest = None;
					rest
				}
			};

			if !entry.is_empty() {
				return Some(decode_entry(self.grammar, entry));
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self.rest {
			None => (0, Some(0)),
			Some(rest) => (0, Some(rest.len())),
		}
	}
}

impl FusedIterator for Entries<'_> {}
