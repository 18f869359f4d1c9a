//! # Lexer - Tokenizing C-family Source
//!
//! Breaks source text into lexemes using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one lexeme**. Whitespace and
//! comments are kept as trivia rather than skipped, which is what lets a
//! rewriter reproduce the untouched parts of a file byte for byte:
//!
//! ```
//! use stream_rewriter_syntax::lexer::lex;
//!
//! let input = "int x = 1; // answer\n";
//! let lexemes = lex(input);
//!
//! let reconstructed: String = lexemes.iter().map(|l| l.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Why Two Token Enums?
//!
//! [`TokenKind`] derives `Logos` and only contains what can actually be
//! matched. [`SyntaxKind`] is the public vocabulary and additionally carries
//! `EOF`, which the buffer appends and the lexer never sees.
//!
//! [`SyntaxKind`]: crate::syntax_kind::SyntaxKind

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Horizontal whitespace
    #[regex(r"[ \t\f]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// `#` to the end of the line
    #[regex(r"#[^\r\n]*")]
    Directive,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Preprocessing number: digits, suffixes and exponents in one lexeme
    #[regex(r"\.?[0-9]([0-9A-Za-z_.]|[eEpP][+-])*")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n]|\\\r?\n)*""#)]
    String,

    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*'")]
    Char,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[regex(r"->|\+\+|--|<<=|>>=|<<|>>|<=|>=|==|!=|&&|\|\||[-+*/%&|^]=|\.\.\.|[-+*/%=<>!&|^~?:.]")]
    Operator,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::LineComment => SyntaxKind::LINE_COMMENT,
            TokenKind::BlockComment => SyntaxKind::BLOCK_COMMENT,
            TokenKind::Directive => SyntaxKind::DIRECTIVE,
            TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::String => SyntaxKind::STRING,
            TokenKind::Char => SyntaxKind::CHAR,
            TokenKind::LParen => SyntaxKind::LPAREN,
            TokenKind::RParen => SyntaxKind::RPAREN,
            TokenKind::LBrace => SyntaxKind::LBRACE,
            TokenKind::RBrace => SyntaxKind::RBRACE,
            TokenKind::LBracket => SyntaxKind::LBRACKET,
            TokenKind::RBracket => SyntaxKind::RBRACKET,
            TokenKind::Semicolon => SyntaxKind::SEMICOLON,
            TokenKind::Comma => SyntaxKind::COMMA,
            TokenKind::Operator => SyntaxKind::OPERATOR,
        }
    }
}

/// A lexed slice of the input with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of lexemes.
///
/// Guarantees that all bytes from the input appear in the output.
pub fn lex(input: &str) -> Vec<Lexeme<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(lexeme, _)| lexeme)
        .collect()
}

/// Lex and return lexemes along with their byte spans.
fn lex_with_spans(input: &str) -> Vec<(Lexeme<'_>, std::ops::Range<usize>)> {
    let mut lexemes = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unrecognized input stays in the buffer so nothing is lost
            Err(()) => SyntaxKind::ERROR,
        };
        lexemes.push((Lexeme { kind, text }, span));
    }

    lexemes
}
