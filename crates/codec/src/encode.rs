use indexmap::IndexMap;

use crate::catalog::OptionIndex;
use crate::grammar::FilterGrammar;
use crate::tag::Tag;

/// Encodes `tags` into one string per grammar, keyed by `filter_key`.
///
/// Output order follows `grammars`. A tag whose key is not recognized under a
/// grammar is left out of that grammar's string. Grammars with no matching
/// tags map to an empty string, which stores treat as unset.
pub fn encode<'g, I>(grammars: I, index: &OptionIndex, tags: &[Tag]) -> IndexMap<String, String>
where
	I: IntoIterator<Item = &'g FilterGrammar>,
{
	grammars
		.into_iter()
		.map(|grammar| (grammar.filter_key.clone(), encode_grammar(grammar, index, tags)))
		.collect()
}

/// Encodes the tags recognized under a single grammar.
pub fn encode_grammar(grammar: &FilterGrammar, index: &OptionIndex, tags: &[Tag]) -> String {
	let entries: Vec<String> = tags
		.iter()
		.filter(|tag| index.recognizes(&grammar.filter_key, &tag.key))
		.map(|tag| grammar.entry(&tag.key, &tag.value))
		.collect();

	tracing::trace!(
		filter_key = %grammar.filter_key,
		selected = entries.len(),
		total = tags.len(),
		"encoded filter grammar"
	);

	entries.join(&grammar.option_connect_mark)
}
