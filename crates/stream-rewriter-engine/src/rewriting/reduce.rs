//! Collapse a rewrite log into at most one operation per token index.
//!
//! The log is walked twice. The first walk visits replaces and lets each one
//! absorb or reject what was queued *before* it. The second walk visits
//! inserts and lets each one merge with or be rejected by what was queued
//! before it. Entries are never removed, only set to `None`, so positions in
//! the log keep meaning "call order" throughout.
//!
//! ```text
//! I.i.u I.j.v                         leave alone, nonoverlapping
//! I.i.u I.i.v                         combine: I.i.uv
//!
//! R.i-j.u R.x-y.v  | i-j in x-y       drop first R
//! R.i-j.u R.x-y.v  | x-y in i-j       ERROR
//! R.i-j.u R.x-y.v  | boundaries overlap ERROR
//! D.i-j   D.x-y    | boundaries overlap combine to min(i,x)..max(j,y)
//!
//! I.i.u R.x-y.v    | i == x           R.x-y.uv, drop I
//! I.i.u R.x-y.v    | i in (x+1)-y     drop I
//! R.x-y.v I.x.u                       R.x-y.uv, drop I
//! R.x-y.v I.i.u    | i in (x+1)-y     ERROR
//! ```

use log::{debug, trace};

use crate::rewriting::error::RewriteError;
use crate::rewriting::operation::{InsertBefore, Operation, Replace};

pub(crate) fn reduce_to_single_operation_per_index(
    log: &mut [Option<Operation>],
) -> Result<(), RewriteError> {
    let queued = log.iter().flatten().count();

    reduce_replaces(log)?;
    reduce_inserts(log)?;

    debug!(
        "reduced {queued} rewrite operations to {}",
        log.iter().flatten().count()
    );
    Ok(())
}

fn reduce_replaces(log: &mut [Option<Operation>]) -> Result<(), RewriteError> {
    for i in 0..log.len() {
        let (prior, rest) = log.split_at_mut(i);
        let Some(Operation::Replace(replace)) = rest[0].as_mut() else {
            continue;
        };

        wipe_prior_inserts(prior, replace);

        let bounds = (replace.from, replace.to);
        drop_prior_replaces(prior, replace)?;

        // A merged deletion may now reach inserts queued between the two
        // deletes; they must not survive inside or at the edge of it.
        if (replace.from, replace.to) != bounds {
            wipe_prior_inserts(prior, replace);
        }
    }
    Ok(())
}

fn wipe_prior_inserts(prior: &mut [Option<Operation>], replace: &mut Replace) {
    for slot in prior.iter_mut() {
        let Some(Operation::InsertBefore(insert)) = slot.as_ref() else {
            continue;
        };
        if insert.index == replace.from {
            trace!(
                "folding insert at {} into replace {}..={}",
                insert.index,
                replace.from,
                replace.to
            );
            replace.prepend(&insert.text);
            *slot = None;
        } else if insert.index > replace.from && insert.index <= replace.to {
            trace!(
                "discarding insert at {} inside replace {}..={}",
                insert.index,
                replace.from,
                replace.to
            );
            *slot = None;
        }
    }
}

fn drop_prior_replaces(
    prior: &mut [Option<Operation>],
    replace: &mut Replace,
) -> Result<(), RewriteError> {
    for slot in prior.iter_mut() {
        let Some(Operation::Replace(previous)) = slot.as_ref() else {
            continue;
        };
        if replace.covers(previous) {
            trace!(
                "dropping replace {}..={} superseded by {}..={}",
                previous.from,
                previous.to,
                replace.from,
                replace.to
            );
            *slot = None;
        } else if replace.is_disjoint(previous) {
            continue;
        } else if previous.is_delete() && replace.is_delete() {
            replace.from = replace.from.min(previous.from);
            replace.to = replace.to.max(previous.to);
            trace!(
                "merged overlapping deletes into {}..={}",
                replace.from,
                replace.to
            );
            *slot = None;
        } else {
            return Err(RewriteError::OverlappingReplace {
                replace: Operation::Replace(replace.clone()),
                previous: Operation::Replace(previous.clone()),
            });
        }
    }
    Ok(())
}

fn reduce_inserts(log: &mut [Option<Operation>]) -> Result<(), RewriteError> {
    for i in 0..log.len() {
        let (prior, rest) = log.split_at_mut(i);
        let Some(Operation::InsertBefore(insert)) = rest[0].as_mut() else {
            continue;
        };

        combine_prior_inserts(prior, insert);

        if fold_into_prior_replace(prior, insert)? {
            rest[0] = None;
        }
    }
    Ok(())
}

fn combine_prior_inserts(prior: &mut [Option<Operation>], insert: &mut InsertBefore) {
    for slot in prior.iter_mut() {
        let Some(Operation::InsertBefore(previous)) = slot.as_ref() else {
            continue;
        };
        if previous.index == insert.index {
            insert.text.insert_str(0, &previous.text);
            *slot = None;
        }
    }
}

/// Returns true if `insert` was absorbed by a replace sharing its left edge.
fn fold_into_prior_replace(
    prior: &mut [Option<Operation>],
    insert: &InsertBefore,
) -> Result<bool, RewriteError> {
    for slot in prior.iter_mut() {
        let Some(Operation::Replace(replace)) = slot.as_mut() else {
            continue;
        };
        if insert.index == replace.from {
            trace!(
                "folding insert at {} into earlier replace {}..={}",
                insert.index,
                replace.from,
                replace.to
            );
            replace.prepend(&insert.text);
            return Ok(true);
        }
        if replace.contains(insert.index) {
            return Err(RewriteError::InsertWithinReplace {
                insert: Operation::InsertBefore(insert.clone()),
                replace: Operation::Replace(replace.clone()),
            });
        }
    }
    Ok(false)
}
