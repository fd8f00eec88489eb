//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines every node and token kind a field declaration can
//! produce. Only declaration-level structure is modelled; expressions and
//! types are kept as flat token runs.

/// All syntax kinds (tokens and nodes) of a TypeScript field declaration
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (declarations, decorators, annotations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,    // identifier
    NUMBER,   // 42, 3.14, 1e3
    STRING,   // "hello" or 'hello'
    TEMPLATE, // `hello ${name}`

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,    // {
    R_BRACE,    // }
    L_BRACKET,  // [
    R_BRACKET,  // ]
    L_PAREN,    // (
    R_PAREN,    // )
    L_ANGLE,    // <
    R_ANGLE,    // >
    SEMICOLON,  // ;
    COLON,      // :
    COMMA,      // ,
    DOT,        // .
    EQ,         // =
    EQ_EQ,      // ==
    EQ_EQ_EQ,   // ===
    BANG_EQ,    // !=
    BANG_EQ_EQ, // !==
    FAT_ARROW,  // =>
    AT,         // @
    QUESTION,   // ?
    BANG,       // !
    PIPE,       // |
    AMP,        // &
    PLUS,       // +
    MINUS,      // -
    STAR,       // *
    SLASH,      // /
    PERCENT,    // %

    // =========================================================================
    // KEYWORDS - accessibility and modifiers
    // =========================================================================
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    READONLY_KW,
    STATIC_KW,
    ABSTRACT_KW,
    DECLARE_KW,
    OVERRIDE_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    SOURCE_FILE,
    PROPERTY_DECLARATION,
    DECORATOR,
    ARGUMENT_LIST,
    TYPE_ANNOTATION,
    INITIALIZER,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PUBLIC_KW as u16) && (self as u16) <= (Self::OVERRIDE_KW as u16)
    }

    /// Check if this is one of the accessibility keywords recorded as the accessor
    pub fn is_accessor(self) -> bool {
        matches!(
            self,
            Self::PUBLIC_KW | Self::PRIVATE_KW | Self::PROTECTED_KW | Self::READONLY_KW
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeScriptLanguage {}

impl rowan::Language for TypeScriptLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<TypeScriptLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<TypeScriptLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<TypeScriptLanguage>;
