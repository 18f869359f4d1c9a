//! # stream-rewriter-syntax
//!
//! Lossless token buffers for C-family source, built with [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! This crate is the upstream half of the rewriting pipeline. It turns text
//! into an immutable, indexed [`BufferedTokenStream`]; the rewriting engine
//! only ever reads from it through the [`TokenStream`] trait.
//!
//! ```text
//! Source Text → Lexer → Lexemes → BufferedTokenStream (+ EOF)
//!               (Logos)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! stream-rewriter-syntax/
//! ├── lib.rs           # This file - public API
//! ├── syntax_kind.rs   # SyntaxKind enum, including the EOF marker
//! ├── lexer.rs         # Logos-based tokenizer
//! └── token_stream.rs  # Token, TokenStream trait, BufferedTokenStream
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use stream_rewriter_syntax::{BufferedTokenStream, SyntaxKind, TokenStream};
//!
//! let stream = BufferedTokenStream::lex("return PLUGIN_OK;");
//!
//! assert_eq!(stream.get(0).unwrap().text, "return");
//! assert_eq!(stream.get(2).unwrap().kind, SyntaxKind::IDENT);
//! assert_eq!(stream.text(0..=stream.last_index()), "return PLUGIN_OK;");
//! ```

pub mod lexer;
pub mod syntax_kind;
pub mod token_stream;

pub use lexer::{Lexeme, lex};
pub use syntax_kind::SyntaxKind;
pub use token_stream::{BufferedTokenStream, EOF_TEXT, Token, TokenStream};
