use stream_rewriter_syntax::TokenStream;

use crate::rewriting::plan::Plan;

/// Walk `start..=stop`, executing planned operations and copying the
/// remaining tokens through.
///
/// `stop` must already be clamped to the last valid index of `tokens`.
pub(crate) fn render<S: TokenStream + ?Sized>(
    tokens: &S,
    mut plan: Plan<'_>,
    start: usize,
    stop: usize,
) -> String {
    let size = tokens.size();
    let mut buf = String::new();

    let mut i = start;
    while i <= stop && i < size {
        match plan.take(i) {
            Some(op) => i = op.execute(&mut buf, tokens),
            None => {
                if let Some(token) = tokens.get(i)
                    && !token.is_eof()
                {
                    buf.push_str(&token.text);
                }
                i += 1;
            }
        }
    }

    // insert_after(last_index, ..) anchors past the buffer, so anything left
    // at or beyond the final token belongs at the very end.
    if stop == size - 1 {
        for op in plan.into_remaining() {
            if op.anchor() >= size - 1
                && let Some(text) = op.text()
            {
                buf.push_str(text);
            }
        }
    }

    buf
}
