//! # tsattr
//!
//! Turns TypeScript field declarations into a private backing field, a public
//! getter and a public setter.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! batch     → Split a selection, run a strategy per declaration, group output
//!   ↓
//! strategy  → LanguageStrategy trait, TypeScript strategy
//!   ↓
//! codegen   → TransformKind, SymbolView, DocBuilder, CodeBuilder
//!   ↓
//! symbols   → SymbolRecord, pre-order tree walker
//!   ↓
//! parser    → Logos lexer, rowan declaration parser
//! ```
//!
//! ## Example
//!
//! ```
//! use tsattr::{LangCodeGen, TransformKind, TranspilerConfig, TypeScriptCodeGen};
//!
//! let mut codegen = TypeScriptCodeGen::generator(TranspilerConfig::default().with_comments(false));
//! let code = codegen
//!     .extract("private foo: string;", &[TransformKind::Getter])
//!     .unwrap();
//! assert_eq!(code, "public get foo(): string {\n    return this.__foo;\n}");
//! ```

// ============================================================================
// MODULES (dependency order: parser → symbols → codegen → strategy → batch)
// ============================================================================

/// Parser: Logos lexer, rowan CST for one or more declarations
pub mod parser;

/// Symbols: the declaration record and the walker that fills it
pub mod symbols;

/// Code generation: views, documentation blocks, per-kind builders
pub mod codegen;

/// Language strategies
pub mod strategy;

/// Selection-level orchestration
pub mod batch;

pub mod config;
pub mod error;

pub use batch::{CodeGen, LangCodeGen, TypeScriptCodeGen, split_declarations};
pub use codegen::{CodeBuilder, DocBuilder, SymbolView, TransformKind, Transformation};
pub use config::TranspilerConfig;
pub use error::{Result, TransformError};
pub use strategy::{LanguageStrategy, TranspiledResult, TypeScriptStrategy};
pub use symbols::{Accessor, SymbolRecord, extract_symbols};
