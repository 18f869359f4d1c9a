//! Indexed, immutable token buffers.
//!
//! A [`TokenStream`] is what a rewriter reads from: tokens are addressed by
//! their 0-based position, and that position never changes once the buffer
//! is built.

use std::ops::RangeInclusive;

use crate::lexer::{self, Lexeme};
use crate::syntax_kind::SyntaxKind;

/// Text carried by the end of stream token. Never rendered.
pub const EOF_TEXT: &str = "<EOF>";

/// A token with a stable index into its buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub index: usize,
    pub kind: SyntaxKind,
    pub text: String,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

/// Read-only access to an indexed token buffer.
pub trait TokenStream {
    /// Number of tokens, including the end of stream marker if present.
    fn size(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Token>;

    /// Original text of the tokens in `interval`, skipping the end of stream
    /// marker. Indices past the end are ignored.
    fn text(&self, interval: RangeInclusive<usize>) -> String {
        let (start, stop) = interval.into_inner();
        let mut buf = String::new();
        if self.size() == 0 {
            return buf;
        }
        let stop = stop.min(self.size() - 1);
        for index in start..=stop {
            if let Some(token) = self.get(index)
                && !token.is_eof()
            {
                buf.push_str(&token.text);
            }
        }
        buf
    }
}

/// A fully buffered token stream terminated by a single `EOF` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedTokenStream {
    tokens: Vec<Token>,
}

impl BufferedTokenStream {
    /// Lex `source` and buffer every lexeme, trivia included.
    pub fn lex(source: &str) -> Self {
        Self::from_lexemes(lexer::lex(source))
    }

    pub fn from_lexemes<'a>(lexemes: impl IntoIterator<Item = Lexeme<'a>>) -> Self {
        Self::from_tokens(lexemes.into_iter().map(|l| (l.kind, l.text)))
    }

    /// Build a buffer from `(kind, text)` pairs, assigning indices in order.
    ///
    /// ```
    /// use stream_rewriter_syntax::{BufferedTokenStream, SyntaxKind, TokenStream};
    ///
    /// let stream = BufferedTokenStream::from_tokens([
    ///     (SyntaxKind::IDENT, "a"),
    ///     (SyntaxKind::IDENT, "b"),
    /// ]);
    /// assert_eq!(stream.size(), 3);
    /// assert!(stream.get(2).unwrap().is_eof());
    /// ```
    pub fn from_tokens<T: Into<String>>(tokens: impl IntoIterator<Item = (SyntaxKind, T)>) -> Self {
        let mut buffered: Vec<Token> = tokens
            .into_iter()
            // A caller supplied EOF would end the stream early
            .filter(|(kind, _)| !kind.is_eof())
            .enumerate()
            .map(|(index, (kind, text))| Token {
                index,
                kind,
                text: text.into(),
            })
            .collect();
        buffered.push(Token {
            index: buffered.len(),
            kind: SyntaxKind::EOF,
            text: EOF_TEXT.to_string(),
        });
        Self { tokens: buffered }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Index of the end of stream token, which is also the last valid index.
    pub fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }
}

impl TokenStream for BufferedTokenStream {
    fn size(&self) -> usize {
        self.tokens.len()
    }

    fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

impl<'a> IntoIterator for &'a BufferedTokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
