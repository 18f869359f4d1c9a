use std::fmt;

use stream_rewriter_syntax::TokenStream;

/// Insert `text` immediately before the token at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertBefore {
    pub index: usize,
    pub text: String,
}

/// Replace the closed token range `from..=to` with `text`, or delete it when
/// `text` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replace {
    pub from: usize,
    pub to: usize,
    pub text: Option<String>,
}

impl Replace {
    pub fn is_delete(&self) -> bool {
        self.text.is_none()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.from <= index && index <= self.to
    }

    /// True if `other` lies entirely within this range (identical ranges count).
    pub fn covers(&self, other: &Replace) -> bool {
        self.from <= other.from && other.to <= self.to
    }

    pub fn is_disjoint(&self, other: &Replace) -> bool {
        other.to < self.from || other.from > self.to
    }

    /// Prefix inserted text onto this replacement; a deletion becomes a
    /// replacement with exactly that text.
    pub(crate) fn prepend(&mut self, text: &str) {
        let mut combined = text.to_string();
        if let Some(existing) = &self.text {
            combined.push_str(existing);
        }
        self.text = Some(combined);
    }
}

/// One queued edit in a rewrite log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    InsertBefore(InsertBefore),
    Replace(Replace),
}

impl Operation {
    /// The token index this operation is keyed to in a reduced plan.
    pub fn anchor(&self) -> usize {
        match self {
            Operation::InsertBefore(op) => op.index,
            Operation::Replace(op) => op.from,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Operation::InsertBefore(op) => Some(&op.text),
            Operation::Replace(op) => op.text.as_deref(),
        }
    }

    /// Write this operation's output and return the next token index to visit.
    pub(crate) fn execute<S: TokenStream + ?Sized>(&self, buf: &mut String, tokens: &S) -> usize {
        match self {
            Operation::InsertBefore(op) => {
                buf.push_str(&op.text);
                if let Some(token) = tokens.get(op.index)
                    && !token.is_eof()
                {
                    buf.push_str(&token.text);
                }
                op.index + 1
            }
            Operation::Replace(op) => {
                if let Some(text) = &op.text {
                    buf.push_str(text);
                }
                op.to + 1
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::InsertBefore(op) => write!(f, "I.{}.'{}'", op.index, op.text),
            Operation::Replace(op) => {
                let tag = if op.is_delete() { 'D' } else { 'R' };
                write!(f, "{tag}.{}", op.from)?;
                if op.to != op.from {
                    write!(f, "-{}", op.to)?;
                }
                match &op.text {
                    Some(text) => write!(f, ".'{text}'"),
                    None => Ok(()),
                }
            }
        }
    }
}

impl From<InsertBefore> for Operation {
    fn from(op: InsertBefore) -> Self {
        Operation::InsertBefore(op)
    }
}

impl From<Replace> for Operation {
    fn from(op: Replace) -> Self {
        Operation::Replace(op)
    }
}
