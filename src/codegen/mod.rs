//! Code generation from extracted symbols.
//!
//! - [`kind`] - `TransformKind` and `Transformation`
//! - [`view`] - `SymbolView`, naming and joining rules over a record
//! - [`docs`] - `DocBuilder` for `/** ... */` blocks
//! - [`builder`] - `CodeBuilder`, one fragment per (record, kind)

mod builder;
mod docs;
mod kind;
mod view;

pub use builder::CodeBuilder;
pub use docs::{DocBuilder, END_DELIMITER, START_DELIMITER};
pub use kind::{TransformKind, Transformation};
pub use view::{BACKING_FIELD_PREFIX, SymbolView};
