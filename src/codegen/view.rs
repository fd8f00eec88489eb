//! Read-only formatting layer over a `SymbolRecord`.

use crate::symbols::SymbolRecord;

/// Prefix that turns a field name into its backing-field name.
///
/// Names that already carry the prefix are prefixed again; no collision
/// check is made against existing members.
pub const BACKING_FIELD_PREFIX: &str = "__";

/// Naming and joining rules applied to a record during generation.
#[derive(Debug, Clone, Copy)]
pub struct SymbolView<'a> {
    record: &'a SymbolRecord,
}

impl<'a> SymbolView<'a> {
    pub fn new(record: &'a SymbolRecord) -> Self {
        Self { record }
    }

    pub fn identifier(&self) -> &'a str {
        &self.record.identifier
    }

    pub fn declared_type(&self) -> &'a str {
        &self.record.declared_type
    }

    /// The declared type, or `None` for the no-explicit-type placeholder.
    pub fn explicit_type(&self) -> Option<&'a str> {
        self.record
            .has_explicit_type()
            .then(|| self.declared_type())
    }

    pub fn backing_field(&self) -> String {
        format!("{BACKING_FIELD_PREFIX}{}", self.record.identifier)
    }

    /// Decorators one per line, blank entries dropped.
    pub fn decorators(&self) -> String {
        self.record
            .decorators
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `= a;b;` for an initialized declaration, `;` otherwise.
    pub fn value(&self) -> String {
        if !self.record.has_value() {
            return ";".to_string();
        }
        let tokens: Vec<&str> = self
            .record
            .value_tokens
            .iter()
            .map(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .collect();
        format!("= {};", tokens.join(";"))
    }

    pub fn static_keyword(&self) -> Option<&'static str> {
        self.record.is_static.then_some("static")
    }
}
