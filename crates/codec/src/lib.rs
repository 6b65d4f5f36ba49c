//! Filter tag codec.
//!
//! Translates between the ordered `key=value` tags a user edits in a dashboard
//! filter bar and the dashboard variables those tags are stored in. Each
//! variable is governed by a [`FilterGrammar`]: a set of literal delimiters
//! wrapping keys and values and separating entries.
//!
//! ```text
//! entry    = key-prefix key key-suffix value-mark value-prefix value value-suffix
//! variable = entry (option-mark entry)*
//! ```
//!
//! Decoding is permissive. Missing delimiters degrade to best-effort results
//! and nothing here returns an error. For grammars whose delimiters do not
//! overlap each other or the tokens, `decode(g, encode([g], tags)) == tags`.

pub use catalog::{OptionCatalog, OptionIndex, label_for};
pub use decode::{Entries, decode, decode_entry};
pub use display::{DISPLAY_LIMIT, TagDisplay, display_tag};
pub use encode::{encode, encode_grammar};
pub use grammar::{FilterGrammar, FilterOption, VARIABLE_PREFIX, variable_name};
pub use tag::{TAG_SEPARATOR, Tag};

mod catalog;
mod decode;
mod display;
mod encode;
mod grammar;
mod tag;
