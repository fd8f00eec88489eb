//! Tree walker that decomposes a declaration CST into a `SymbolRecord`.
//!
//! The walk is a single pre-order pass over nodes and tokens in source order.
//! It never fails: anything it cannot place is skipped and the record keeps
//! its defaults.

use rowan::NodeOrToken;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, parse_declaration};

use super::context::{ExtractState, Lookback};
use super::types::{Accessor, SymbolRecord};

/// Parse a declaration and extract its symbol record.
pub fn extract_symbols(input: &str) -> SymbolRecord {
    let parse = parse_declaration(input);
    if !parse.ok() {
        debug!(
            errors = parse.errors.len(),
            first = %parse.errors[0].message,
            "declaration parsed with errors, extracting best effort"
        );
    }
    let record = extract_from_syntax(&parse.syntax());
    debug!(
        identifier = %record.identifier,
        declared_type = %record.declared_type,
        "extracted declaration"
    );
    record
}

/// Extract a symbol record from an already parsed tree.
///
/// A record describes one declaration: when `root` holds several, the walk
/// stops after the first.
pub fn extract_from_syntax(root: &SyntaxNode) -> SymbolRecord {
    let mut record = SymbolRecord {
        original_text: root.text().to_string(),
        ..SymbolRecord::default()
    };

    let state = if root.kind() == SyntaxKind::SOURCE_FILE {
        walk_first_declaration(root, &mut record)
    } else {
        walk_node(root, ExtractState::default(), &mut record)
    };

    // End of input closes an open initializer like a terminator would.
    if state.accumulating() {
        let (_, value) = state.take_value();
        record.value_tokens = value;
    }

    record
}

fn walk_first_declaration(root: &SyntaxNode, record: &mut SymbolRecord) -> ExtractState {
    let mut state = ExtractState::default();
    for element in root.children_with_tokens() {
        let is_declaration = element.kind() == SyntaxKind::PROPERTY_DECLARATION;
        state = walk_element(element, state, record);
        if is_declaration {
            break;
        }
    }
    state
}

fn walk_element(element: SyntaxElement, state: ExtractState, record: &mut SymbolRecord) -> ExtractState {
    match element {
        NodeOrToken::Node(child) => walk_node(&child, state, record),
        NodeOrToken::Token(token) => walk_token(&token, state, record),
    }
}

fn walk_node(node: &SyntaxNode, state: ExtractState, record: &mut SymbolRecord) -> ExtractState {
    if node.kind() == SyntaxKind::DECORATOR {
        let text = node.text().to_string();
        trace!(decorator = %text, "committed decorator");
        record.decorators.push(SmolStr::new(text));
        return state;
    }

    node.children_with_tokens()
        .fold(state, |state, element| walk_element(element, state, record))
}

fn walk_token(token: &SyntaxToken, state: ExtractState, record: &mut SymbolRecord) -> ExtractState {
    let kind = token.kind();
    if kind.is_trivia() {
        return state;
    }

    // An open initializer swallows everything up to its terminator.
    if state.accumulating() {
        return match kind {
            SyntaxKind::SEMICOLON => {
                let (state, value) = state.take_value();
                trace!(tokens = value.len(), "committed value");
                record.value_tokens = value;
                state
            }
            _ => state.push_value(token.text()),
        };
    }

    match kind {
        SyntaxKind::STATIC_KW => {
            record.is_static = true;
            state
        }
        _ if kind.is_accessor() => {
            if let Some(accessor) = Accessor::from_keyword(token.text()) {
                record.accessor = accessor;
            }
            state
        }
        SyntaxKind::IDENT => walk_identifier(token, state, record),
        SyntaxKind::COLON => state.with_lookback(Lookback::Colon),
        SyntaxKind::EQ => state.with_lookback(Lookback::Assignment),
        _ => state,
    }
}

fn walk_identifier(
    token: &SyntaxToken,
    mut state: ExtractState,
    record: &mut SymbolRecord,
) -> ExtractState {
    let text = token.text();
    if state.lookback == Lookback::Colon && !state.type_committed {
        trace!(declared_type = text, "committed type");
        record.declared_type = SmolStr::new(text);
        state.type_committed = true;
        // Qualified and generic types keep only their first identifier.
        state.with_lookback(Lookback::None)
    } else if !state.identifier_committed {
        trace!(identifier = text, "committed identifier");
        record.identifier = SmolStr::new(text);
        state.identifier_committed = true;
        state
    } else {
        state
    }
}
