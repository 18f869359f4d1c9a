/*!
 * # Rewriting Module
 *
 * Lazy, index-addressed editing of an immutable token stream.
 *
 * ## Architecture Overview
 *
 * ### 1. The Token Stream Is Never Touched
 * - The rewriter only borrows a **`TokenStream`**; token indices always refer
 *   to the original buffer
 * - The original text can be recovered at any time by discarding the log
 *
 * ### 2. Edits Are Queued
 * - `insert_before`, `insert_after`, `replace` and `delete` append an
 *   **`Operation`** to the rewrite log and do nothing else
 * - Call order matters: it decides which of two conflicting edits wins
 *
 * ### 3. Reduction Before Rendering
 * - On every render a copy of the log is **reduced** to at most one operation
 *   per token index (`reduce`). Inserts at the same index are joined,
 *   covered replaces are dropped, overlapping deletes merge, and edits that
 *   cannot be reconciled are reported as a `RewriteError`
 *
 * ### 4. Rendering
 * - `render` walks the requested token interval, executing the planned
 *   operation anchored at each index or copying the token through
 * - The end of stream token is never written
 *
 * ## Module Structure
 *
 * - **`rewriter`**: `Rewriter`, the edit API and text accessors
 * - **`operation`**: the `Operation` enum and its execution
 * - **`reduce`**: the conflict resolution pass
 * - **`plan`**: survivors of reduction keyed by anchor index
 * - **`render`**: the token walk producing output text
 * - **`error`**: `RewriteError`
 */

pub mod error;
pub mod operation;
mod plan;
mod reduce;
mod render;
pub mod rewriter;

pub use error::RewriteError;
pub use operation::{InsertBefore, Operation, Replace};
pub use rewriter::{Checkpoint, Rewriter};
