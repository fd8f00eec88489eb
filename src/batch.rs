//! Batch entry point: a whole selection in, one generated block out.

use tracing::debug;

use crate::codegen::{TransformKind, Transformation};
use crate::config::TranspilerConfig;
use crate::error::Result;
use crate::parser::{SyntaxKind, tokenize};
use crate::strategy::{LanguageStrategy, TypeScriptStrategy};

/// Main entry point for a host integration.
pub trait LangCodeGen {
    /// Generate code for every declaration in `selected`, grouped by kind.
    fn extract(&mut self, selected: &str, kinds: &[TransformKind]) -> Result<String>;
}

/// Drives a [`LanguageStrategy`] over every declaration of a selection.
#[derive(Debug, Default)]
pub struct CodeGen<S> {
    strategy: S,
}

/// The TypeScript generator.
pub type TypeScriptCodeGen = CodeGen<TypeScriptStrategy>;

impl CodeGen<TypeScriptStrategy> {
    pub fn generator(config: TranspilerConfig) -> Self {
        Self::new(TypeScriptStrategy::new(config))
    }
}

impl<S: LanguageStrategy> CodeGen<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: LanguageStrategy> LangCodeGen for CodeGen<S> {
    fn extract(&mut self, selected: &str, kinds: &[TransformKind]) -> Result<String> {
        let fragments = split_declarations(selected);
        let mut transformed = Vec::with_capacity(fragments.len() * kinds.len());
        for fragment in &fragments {
            let result = self.strategy.parse(fragment, kinds)?;
            transformed.extend(result.transformations);
        }

        sort_by_group(&mut transformed);
        debug!(
            declarations = fragments.len(),
            outputs = transformed.len(),
            "generated selection"
        );

        Ok(transformed
            .into_iter()
            .map(|t| t.generated_text)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Stable grouping: attributes, then getters, then setters.
/// Within a group the incoming order is kept.
pub fn sort_by_group(transformations: &mut [Transformation]) {
    transformations.sort_by_key(|t| t.kind.group_rank());
}

/// Split a selection into single declarations.
///
/// Every `;` outside brackets, strings and comments ends a declaration and
/// stays with it. A trailing segment without `;` is cut once more at its
/// first top-level comma. Blank fragments, including bare `;`, are dropped.
pub fn split_declarations(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0usize;
    let mut nesting = Nesting::default();

    for token in tokenize(text) {
        if token.kind == SyntaxKind::SEMICOLON && nesting.at_top_level() {
            let end = usize::from(token.offset) + token.text.len();
            fragments.push(&text[start..end]);
            start = end;
        }
        nesting.step(token.kind);
    }

    let rest = &text[start..];
    match first_top_level_comma(rest) {
        Some(comma) => {
            fragments.push(&rest[..comma]);
            fragments.push(&rest[comma + 1..]);
        }
        None => fragments.push(rest),
    }

    fragments
        .into_iter()
        .filter(|f| !f.trim_end_matches(';').trim().is_empty())
        .map(str::trim)
        .collect()
}

fn first_top_level_comma(text: &str) -> Option<usize> {
    let mut nesting = Nesting::default();
    for token in tokenize(text) {
        if token.kind == SyntaxKind::COMMA && nesting.at_top_level() {
            return Some(token.offset.into());
        }
        nesting.step(token.kind);
    }
    None
}

/// Where a top-level token sits within its declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Position {
    #[default]
    Head,
    Type,
    Value,
}

/// Bracket depth over a token stream.
///
/// `<` and `>` only nest inside a type annotation; in an initializer they are
/// comparison operators.
#[derive(Debug, Default)]
struct Nesting {
    depth: usize,
    position: Position,
}

impl Nesting {
    fn at_top_level(&self) -> bool {
        self.depth == 0
    }

    fn step(&mut self, kind: SyntaxKind) {
        match kind {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => self.depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                self.depth = self.depth.saturating_sub(1)
            }
            SyntaxKind::L_ANGLE if self.position == Position::Type => self.depth += 1,
            SyntaxKind::R_ANGLE if self.position == Position::Type => {
                self.depth = self.depth.saturating_sub(1)
            }
            _ if self.depth > 0 => {}
            SyntaxKind::COLON if self.position == Position::Head => self.position = Position::Type,
            SyntaxKind::EQ => self.position = Position::Value,
            SyntaxKind::SEMICOLON => self.position = Position::Head,
            _ => {}
        }
    }
}
