//! Symbol extraction from the declaration CST.
//!
//! # Module structure
//!
//! - [`types`] - `SymbolRecord` and `Accessor`
//! - [`context`] - `ExtractState`, the lookback register threaded through the walk
//! - [`extract`] - The pre-order tree walker

mod context;
mod extract;
mod types;

pub use extract::{extract_from_syntax, extract_symbols};
pub use types::{Accessor, NO_EXPLICIT_TYPE, SymbolRecord};
