//! Recursive descent parser for TypeScript field declarations
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST: the text of the
//! root node is always exactly the input.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse one or more field declarations into a CST
pub fn parse_declaration(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Look ahead, skipping trivia
    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            });
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Bump tokens until one of `stops` is found outside any bracket pair.
    /// `<` and `>` pair up only when `angles` is set (type arguments).
    /// Returns false if the input ended with brackets still open.
    fn bump_balanced_until(&mut self, stops: &[SyntaxKind], angles: bool) -> bool {
        let mut depth = 0usize;
        while !self.at_eof() {
            let kind = self.current_kind();
            if depth == 0 && stops.contains(&kind) {
                break;
            }
            match kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1)
                }
                SyntaxKind::L_ANGLE if angles => depth += 1,
                SyntaxKind::R_ANGLE if angles => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
        depth == 0
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = PropertyDeclaration*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        while !self.at_eof() {
            let pos_before = self.pos;
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            self.parse_property_declaration();
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump();
            }
        }

        self.finish_node();
    }

    /// PropertyDeclaration = Decorator* Modifier* Name ('?' | '!')? TypeAnnotation? Initializer? ';'?
    fn parse_property_declaration(&mut self) {
        self.start_node(SyntaxKind::PROPERTY_DECLARATION);

        while self.at(SyntaxKind::AT) {
            self.parse_decorator();
            self.skip_trivia();
        }

        while self.current_kind().is_keyword() {
            self.bump();
            self.skip_trivia();
        }

        if !self.eat(SyntaxKind::IDENT) {
            self.error("expected property name");
        }

        if matches!(self.nth(0), SyntaxKind::QUESTION | SyntaxKind::BANG) {
            self.skip_trivia();
            self.bump();
        }

        if self.nth(0) == SyntaxKind::COLON {
            self.skip_trivia();
            self.parse_type_annotation();
        }

        if self.nth(0) == SyntaxKind::EQ {
            self.skip_trivia();
            self.parse_initializer();
        }

        self.skip_trivia();
        if !self.at_eof() && !self.eat(SyntaxKind::SEMICOLON) {
            self.error_recover("expected ';'", &[SyntaxKind::SEMICOLON]);
            self.eat(SyntaxKind::SEMICOLON);
        }

        self.finish_node();
    }

    /// Decorator = '@' Ident ('.' Ident)* ArgumentList?
    fn parse_decorator(&mut self) {
        self.start_node(SyntaxKind::DECORATOR);
        self.bump(); // '@'

        if !self.eat(SyntaxKind::IDENT) {
            self.error("expected decorator name");
        }
        while self.nth(0) == SyntaxKind::DOT {
            self.skip_trivia();
            self.bump();
            self.skip_trivia();
            if !self.eat(SyntaxKind::IDENT) {
                self.error("expected name after '.'");
                break;
            }
        }
        if self.nth(0) == SyntaxKind::L_PAREN {
            self.skip_trivia();
            self.parse_argument_list();
        }

        self.finish_node();
    }

    /// ArgumentList = '(' balanced-tokens ')'
    fn parse_argument_list(&mut self) {
        self.start_node(SyntaxKind::ARGUMENT_LIST);
        self.bump(); // '('
        let closed = self.bump_balanced_until(&[SyntaxKind::R_PAREN], false);
        if !(closed && self.eat(SyntaxKind::R_PAREN)) {
            self.error("unclosed '('");
        }
        self.finish_node();
    }

    /// TypeAnnotation = ':' type-tokens
    fn parse_type_annotation(&mut self) {
        self.start_node(SyntaxKind::TYPE_ANNOTATION);
        self.bump(); // ':'
        self.skip_trivia();
        if self.at_eof() || self.at_any(&[SyntaxKind::EQ, SyntaxKind::SEMICOLON]) {
            self.error("expected type");
        } else if !self.bump_balanced_until(&[SyntaxKind::EQ, SyntaxKind::SEMICOLON], true) {
            self.error("unbalanced brackets in type");
        }
        self.finish_node();
    }

    /// Initializer = '=' expression-tokens
    fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::INITIALIZER);
        self.bump(); // '='
        self.skip_trivia();
        if self.at_eof() || self.at(SyntaxKind::SEMICOLON) {
            self.error("expected initializer expression");
        } else if !self.bump_balanced_until(&[SyntaxKind::SEMICOLON], false) {
            self.error("unbalanced brackets in initializer");
        }
        self.finish_node();
    }
}
