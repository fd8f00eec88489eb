//! Language strategies: one declaration in, its record and fragments out.

use tracing::debug;

use crate::codegen::{CodeBuilder, TransformKind, Transformation};
use crate::config::TranspilerConfig;
use crate::error::Result;
use crate::symbols::{SymbolRecord, extract_symbols};

/// Extracted record plus the fragments generated from it, in requested order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspiledResult {
    pub symbols: SymbolRecord,
    pub transformations: Vec<Transformation>,
}

/// Turns a single declaration into generated code for a language.
///
/// Implementations may keep scratch state between calls, hence `&mut self`.
pub trait LanguageStrategy {
    fn parse(&mut self, input: &str, kinds: &[TransformKind]) -> Result<TranspiledResult>;
}

/// TypeScript field declarations to backing fields, getters and setters.
#[derive(Debug, Default)]
pub struct TypeScriptStrategy {
    config: TranspilerConfig,
    builder: CodeBuilder,
}

impl TypeScriptStrategy {
    pub fn new(config: TranspilerConfig) -> Self {
        Self {
            config,
            builder: CodeBuilder::new(),
        }
    }

    pub fn config(&self) -> &TranspilerConfig {
        &self.config
    }
}

impl LanguageStrategy for TypeScriptStrategy {
    fn parse(&mut self, input: &str, kinds: &[TransformKind]) -> Result<TranspiledResult> {
        let symbols = extract_symbols(input);
        let transformations = kinds
            .iter()
            .map(|&kind| {
                self.builder
                    .build(&symbols, kind, &self.config)
                    .map(|generated_text| Transformation {
                        kind,
                        generated_text,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            identifier = %symbols.identifier,
            outputs = transformations.len(),
            "transpiled declaration"
        );
        Ok(TranspiledResult {
            symbols,
            transformations,
        })
    }
}
