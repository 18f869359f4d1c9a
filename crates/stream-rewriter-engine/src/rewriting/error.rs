use thiserror::Error;

use crate::rewriting::operation::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Rejected when the edit is queued; nothing is appended to the log.
    #[error("replace: range invalid: {from}..{to} (size={size})")]
    InvalidRange { from: usize, to: usize, size: usize },

    #[error("replace op boundaries of {replace} overlap with previous {previous}")]
    OverlappingReplace {
        replace: Operation,
        previous: Operation,
    },

    #[error("insert op {insert} within boundaries of previous {replace}")]
    InsertWithinReplace { insert: Operation, replace: Operation },
}
