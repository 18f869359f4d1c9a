use log::trace;
use stream_rewriter_syntax::{BufferedTokenStream, Token, TokenStream};

use crate::rewriting::error::RewriteError;
use crate::rewriting::operation::{InsertBefore, Operation, Replace};
use crate::rewriting::plan::Plan;
use crate::rewriting::reduce::reduce_to_single_operation_per_index;
use crate::rewriting::render::render;

/// A position in the rewrite log returned by [`Rewriter::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Queues edits against an immutable token stream and renders them lazily.
///
/// The token stream is only ever borrowed, and token indices keep referring
/// to the original buffer no matter how many edits are queued:
///
/// ```
/// use stream_rewriter_engine::{BufferedTokenStream, Rewriter};
///
/// let tokens = BufferedTokenStream::lex("int x;");
/// let mut rewriter = Rewriter::new(&tokens);
///
/// rewriter.insert_before(0, "static ");
/// rewriter.replace(2, 2, "count").unwrap();
///
/// assert_eq!(rewriter.text().unwrap(), "static int count;");
/// ```
#[derive(Debug, Clone)]
pub struct Rewriter<'a, S: TokenStream + ?Sized = BufferedTokenStream> {
    tokens: &'a S,
    log: Vec<Operation>,
}

impl<'a, S: TokenStream + ?Sized> Rewriter<'a, S> {
    pub fn new(tokens: &'a S) -> Self {
        Self {
            tokens,
            log: Vec::new(),
        }
    }

    pub fn tokens(&self) -> &'a S {
        self.tokens
    }

    /// Edits in the order they were queued.
    pub fn operations(&self) -> &[Operation] {
        &self.log
    }

    fn push(&mut self, op: Operation) {
        trace!("queued {op}");
        self.log.push(op);
    }

    // === EDIT API ===

    /// Insert `text` before the token at `index`.
    ///
    /// `index` is not checked against the stream, so inserting past the last
    /// token is allowed.
    pub fn insert_before(&mut self, index: usize, text: impl Into<String>) {
        self.push(Operation::InsertBefore(InsertBefore {
            index,
            text: text.into(),
        }));
    }

    /// Insert `text` after the token at `index`. Past the last token this is
    /// a trailing insert.
    pub fn insert_after(&mut self, index: usize, text: impl Into<String>) {
        self.insert_before(index.saturating_add(1), text);
    }

    pub fn insert_before_token(&mut self, token: &Token, text: impl Into<String>) {
        self.insert_before(token.index, text);
    }

    pub fn insert_after_token(&mut self, token: &Token, text: impl Into<String>) {
        self.insert_after(token.index, text);
    }

    /// Replace tokens `from..=to` with `text`.
    pub fn replace(
        &mut self,
        from: usize,
        to: usize,
        text: impl Into<String>,
    ) -> Result<(), RewriteError> {
        self.queue_replace(from, to, Some(text.into()))
    }

    pub fn replace_token(
        &mut self,
        token: &Token,
        text: impl Into<String>,
    ) -> Result<(), RewriteError> {
        self.replace(token.index, token.index, text)
    }

    pub fn replace_tokens(
        &mut self,
        from: &Token,
        to: &Token,
        text: impl Into<String>,
    ) -> Result<(), RewriteError> {
        self.replace(from.index, to.index, text)
    }

    /// Remove tokens `from..=to` from the output.
    pub fn delete(&mut self, from: usize, to: usize) -> Result<(), RewriteError> {
        self.queue_replace(from, to, None)
    }

    pub fn delete_token(&mut self, token: &Token) -> Result<(), RewriteError> {
        self.delete(token.index, token.index)
    }

    pub fn delete_tokens(&mut self, from: &Token, to: &Token) -> Result<(), RewriteError> {
        self.delete(from.index, to.index)
    }

    fn queue_replace(
        &mut self,
        from: usize,
        to: usize,
        text: Option<String>,
    ) -> Result<(), RewriteError> {
        let size = self.tokens.size();
        if from > to || to >= size {
            return Err(RewriteError::InvalidRange { from, to, size });
        }
        self.push(Operation::Replace(Replace { from, to, text }));
        Ok(())
    }

    // === TRANSACTIONS ===

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.log.len())
    }

    /// Forget every edit queued after `checkpoint` was taken.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        trace!(
            "rolling back {} queued operations",
            self.log.len().saturating_sub(checkpoint.0)
        );
        self.log.truncate(checkpoint.0);
    }

    pub fn discard_edits(&mut self) {
        self.log.clear();
    }

    // === RENDERING ===

    /// The survivors of reducing the current log, in log order.
    ///
    /// This is exactly what rendering executes; the log itself is untouched.
    pub fn reduced_operations(&self) -> Result<Vec<Operation>, RewriteError> {
        Ok(self.reduce()?.into_iter().flatten().collect())
    }

    fn reduce(&self) -> Result<Vec<Option<Operation>>, RewriteError> {
        let mut reduced: Vec<Option<Operation>> = self.log.iter().cloned().map(Some).collect();
        reduce_to_single_operation_per_index(&mut reduced)?;
        Ok(reduced)
    }

    /// Render the whole stream with every queued edit applied.
    pub fn text(&self) -> Result<String, RewriteError> {
        match self.tokens.size() {
            0 => Ok(String::new()),
            size => self.text_for_range(0, size - 1),
        }
    }

    /// Render the tokens from `start` to `stop` inclusive.
    ///
    /// Edits anchored on the first and last token of the interval are
    /// included, as are inserts after the final token when `stop` is the last
    /// index of the stream.
    pub fn interval_text(&self, start: &Token, stop: &Token) -> Result<String, RewriteError> {
        self.text_for_range(start.index, stop.index)
    }

    /// Index-addressed form of [`Rewriter::interval_text`]. `stop` is clamped
    /// to the last token.
    pub fn text_for_range(&self, start: usize, stop: usize) -> Result<String, RewriteError> {
        let size = self.tokens.size();
        if size == 0 {
            return Ok(String::new());
        }
        let stop = stop.min(size - 1);
        if start > stop {
            return Ok(String::new());
        }

        if self.log.is_empty() {
            // no instructions to execute
            return Ok(self.tokens.text(start..=stop));
        }

        let reduced = self.reduce()?;
        Ok(render(self.tokens, Plan::new(&reduced), start, stop))
    }
}
