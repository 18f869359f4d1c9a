pub mod rewriting;

// Re-export key types for easier usage
pub use rewriting::{Checkpoint, InsertBefore, Operation, Replace, RewriteError, Rewriter};
pub use stream_rewriter_syntax::{BufferedTokenStream, SyntaxKind, Token, TokenStream};
