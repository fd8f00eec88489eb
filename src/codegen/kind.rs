//! Output kinds and per-kind generation results.

use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;

/// A requested output for a declaration.
///
/// The declaration order is also the grouping precedence used when several
/// results are merged: attributes first, then getters, then setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransformKind {
    /// Renamed private backing field
    Attribute,
    /// Public accessor method
    Getter,
    /// Public mutator method
    Setter,
    /// Recognized target with no generator
    Method,
}

impl TransformKind {
    /// The kinds a generator can actually produce, in grouping order.
    pub const SUPPORTED: [TransformKind; 3] = [Self::Attribute, Self::Getter, Self::Setter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Method => "method",
        }
    }

    /// Accessor keyword emitted before a generated method name.
    pub fn sub_accessor(&self) -> &'static str {
        match self {
            Self::Getter => "get",
            Self::Setter => "set",
            Self::Attribute | Self::Method => "",
        }
    }

    /// Position of this kind's group in merged output.
    pub fn group_rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attribute" => Ok(Self::Attribute),
            "getter" => Ok(Self::Getter),
            "setter" => Ok(Self::Setter),
            "method" => Ok(Self::Method),
            _ => Err(TransformError::UnknownTransformationKind(s.to_string())),
        }
    }
}

/// One generated fragment for a (declaration, kind) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub kind: TransformKind,
    pub generated_text: String,
}
