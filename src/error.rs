//! Error types for code generation.

use thiserror::Error;

use crate::codegen::TransformKind;

/// Errors that can occur while generating code for a declaration.
///
/// Malformed declarations are not errors: extraction degrades to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The kind is a known transformation target this generator cannot produce.
    #[error("unsupported transformation kind: {0}")]
    InvalidTransformationKind(TransformKind),

    /// The kind name did not match any transformation target.
    #[error("unknown transformation kind: {0:?}")]
    UnknownTransformationKind(String),
}

/// Result alias for generation operations.
pub type Result<T, E = TransformError> = std::result::Result<T, E>;
