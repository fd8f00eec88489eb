//! Shared helpers for generation tests.

#![allow(dead_code)]

use tsattr::{
    LangCodeGen, LanguageStrategy, TransformKind, Transformation, TranspilerConfig,
    TypeScriptCodeGen, TypeScriptStrategy,
};

/// All three kinds in the order a host usually requests them.
pub const ALL_KINDS: [TransformKind; 3] = [
    TransformKind::Getter,
    TransformKind::Setter,
    TransformKind::Attribute,
];

/// Remove every whitespace character, for layout-insensitive comparisons.
pub fn clean_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Configuration without documentation blocks.
pub fn no_comments() -> TranspilerConfig {
    TranspilerConfig::default().with_comments(false)
}

/// Generate one fragment for a single declaration.
pub fn transform(input: &str, kind: TransformKind, config: TranspilerConfig) -> String {
    let mut strategy = TypeScriptStrategy::new(config);
    let mut result = strategy
        .parse(input, &[kind])
        .unwrap_or_else(|e| panic!("failed to transform {input:?}: {e}"));
    assert_eq!(result.transformations.len(), 1);
    result.transformations.remove(0).generated_text
}

/// Run a whole selection through the batch generator.
pub fn extract(selected: &str, kinds: &[TransformKind], config: TranspilerConfig) -> String {
    TypeScriptCodeGen::generator(config)
        .extract(selected, kinds)
        .unwrap_or_else(|e| panic!("failed to extract {selected:?}: {e}"))
}

/// Transformations of every declaration, flattened in declaration-then-kind order.
pub fn unsorted_transformations(
    declarations: &[&str],
    kinds: &[TransformKind],
) -> Vec<Transformation> {
    let mut strategy = TypeScriptStrategy::new(no_comments());
    declarations
        .iter()
        .flat_map(|d| {
            strategy
                .parse(d, kinds)
                .unwrap_or_else(|e| panic!("failed to transform {d:?}: {e}"))
                .transformations
        })
        .collect()
}
