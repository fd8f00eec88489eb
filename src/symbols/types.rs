//! Type definitions for symbol extraction.
//!
//! Contains the decomposed declaration (`SymbolRecord`) and the accessor
//! keyword it was declared with.

use std::fmt;

use smol_str::SmolStr;

/// Type recorded when a declaration has no explicit annotation.
pub const NO_EXPLICIT_TYPE: &str = "any";

/// Accessibility keyword of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Accessor {
    #[default]
    Public,
    Private,
    Protected,
    Readonly,
}

impl Accessor {
    /// Get the keyword as written in source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Readonly => "readonly",
        }
    }

    /// Map an accessibility keyword to its accessor, if it is one.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            "readonly" => Some(Self::Readonly),
            _ => None,
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field declaration decomposed into its semantic parts.
///
/// Built once by [`extract_symbols`](super::extract_symbols) and read-only
/// afterwards. Every field has a usable default so that partial input still
/// produces a record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolRecord {
    /// Raw declaration text, kept for diagnostics
    pub original_text: String,
    /// Decorator source fragments in source order
    pub decorators: Vec<SmolStr>,
    pub accessor: Accessor,
    /// Field name; empty if none was found
    pub identifier: SmolStr,
    /// Declared type; [`NO_EXPLICIT_TYPE`] if there was no annotation
    pub declared_type: SmolStr,
    /// Initializer tokens; empty if there was no initializer
    pub value_tokens: Vec<SmolStr>,
    pub is_static: bool,
}

impl Default for SymbolRecord {
    fn default() -> Self {
        Self {
            original_text: String::new(),
            decorators: Vec::new(),
            accessor: Accessor::default(),
            identifier: SmolStr::default(),
            declared_type: SmolStr::new_static(NO_EXPLICIT_TYPE),
            value_tokens: Vec::new(),
            is_static: false,
        }
    }
}

impl SymbolRecord {
    /// True when the declaration carried a type other than the placeholder.
    pub fn has_explicit_type(&self) -> bool {
        self.declared_type != NO_EXPLICIT_TYPE
    }

    /// True when the declaration had an initializer.
    pub fn has_value(&self) -> bool {
        self.value_tokens.iter().any(|t| !t.is_empty())
    }
}
