use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::rewriting::operation::Operation;

/// Reduced operations keyed by anchor, remembering log order for the
/// trailing flush.
pub(crate) struct Plan<'log> {
    ops: Vec<Option<&'log Operation>>,
    by_anchor: HashMap<usize, usize>,
}

impl<'log> Plan<'log> {
    /// Index the survivors of a reduced log.
    ///
    /// Panics if two survivors share an anchor: reduction guarantees they
    /// cannot, and rendering either one alone would silently lose text.
    pub(crate) fn new(reduced: &'log [Option<Operation>]) -> Self {
        let mut ops = Vec::new();
        let mut by_anchor = HashMap::new();

        for op in reduced.iter().flatten() {
            match by_anchor.entry(op.anchor()) {
                Entry::Vacant(entry) => {
                    entry.insert(ops.len());
                    ops.push(Some(op));
                }
                Entry::Occupied(_) => panic!(
                    "reduction left a second operation anchored at token {}: {op}",
                    op.anchor()
                ),
            }
        }

        Self { ops, by_anchor }
    }

    /// Remove and return the operation anchored at `index`.
    pub(crate) fn take(&mut self, index: usize) -> Option<&'log Operation> {
        let slot = self.by_anchor.remove(&index)?;
        self.ops[slot].take()
    }

    /// Operations not yet taken, in log order.
    pub(crate) fn into_remaining(self) -> impl Iterator<Item = &'log Operation> {
        self.ops.into_iter().flatten()
    }
}
