//! Filter bar panel state.
//!
//! Wires the tag codec to its collaborators:
//!
//! - **Configuration**: the panel options document (`filterConfig` grammars and
//!   selectable `options`), loaded from JSON or TOML.
//! - **Variable stores**: where encoded variables live. [`MemoryStore`] for
//!   tests and embedding, [`QueryStore`] for dashboard URLs (`var-*` params).
//! - **Filter bar**: the current tag list. User actions go through the pure
//!   [`reduce`] transition; [`FilterBar::apply`] then persists every grammar's
//!   variable in one write.

pub mod config;
pub mod error;
pub mod filter_bar;
pub mod state;
pub mod store;

pub use config::{ConfigWarning, PanelOptions};
pub use error::{ConfigError, Result, StoreError};
pub use filter_bar::{FilterBar, decode_all};
pub use state::{TagAction, reduce};
pub use store::{MemoryStore, QueryStore, VariableStore};
pub use tagbar_codec as codec;
