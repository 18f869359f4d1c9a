//! SyntaxKind enum for every token a C-family buffer can hold.
//!
//! The lexer never produces `EOF`; it is appended by
//! [`BufferedTokenStream`](crate::token_stream::BufferedTokenStream) so that
//! "insert after the last real token" always has a token to anchor to.

/// All token kinds in a token buffer.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    /// Horizontal whitespace (spaces, tabs, form feeds)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// `// ...` up to the end of the line
    LINE_COMMENT,
    /// `/* ... */`
    BLOCK_COMMENT,
    /// Preprocessor line such as `#include "papi.h"`
    DIRECTIVE,
    /// Identifier or keyword
    IDENT,
    /// Numeric literal (preprocessing-number shape)
    NUMBER,
    /// `"..."` string literal
    STRING,
    /// `'c'` character literal
    CHAR,
    /// `(`
    LPAREN,
    /// `)`
    RPAREN,
    /// `{`
    LBRACE,
    /// `}`
    RBRACE,
    /// `[`
    LBRACKET,
    /// `]`
    RBRACKET,
    /// `;`
    SEMICOLON,
    /// `,`
    COMMA,
    /// Any operator, single or compound (`+`, `->`, `<<=`, ...)
    OPERATOR,
    /// Bytes the lexer could not classify
    ERROR,
    /// End of stream marker; its text is never rendered
    EOF,
}

impl SyntaxKind {
    /// Returns true if this kind is trivia (whitespace, newlines, comments).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE) || self.is_comment()
    }

    /// Returns true if this kind is a comment.
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    pub fn is_eof(self) -> bool {
        self == Self::EOF
    }
}
