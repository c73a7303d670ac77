//! # Apply Session
//!
//! This module drives a `PatchApplier` over a resolved selection,
//! sequentially and fail-fast: the first failing patch aborts the session,
//! subsequent patches are never attempted, and no rollback is performed.
//! Recovery from a failed session is the operator's `reset` command.
//!
//! A progress callback fires before each attempt, so "N of M patches applied
//! before failure" is always derivable from the emitted markers.

use log::info;

use crate::error::Result;
use crate::patcher::PatchApplier;

/// Applies an entire selection, in order, with fail-fast semantics.
pub struct ApplySession<'a> {
    applier: &'a dyn PatchApplier,
}

impl<'a> ApplySession<'a> {
    pub fn new(applier: &'a dyn PatchApplier) -> Self {
        Self { applier }
    }

    /// Apply every patch in `selection`, in order.
    ///
    /// `progress` is invoked with `(index, total, patch)` immediately before
    /// each application attempt. On the first failure the session returns the
    /// applier's error, which carries the failing identifier; the vendored
    /// tree is left as the failing attempt produced it.
    ///
    /// An empty selection is trivially successful with no side effects.
    /// Returns the number of patches applied.
    pub fn run<F>(&self, selection: &[String], mut progress: F) -> Result<usize>
    where
        F: FnMut(usize, usize, &str),
    {
        let total = selection.len();
        for (index, patch) in selection.iter().enumerate() {
            progress(index, total, patch);
            info!("applying patch {}/{}: {}", index + 1, total, patch);
            self.applier.apply(patch)?;
        }
        Ok(total)
    }
}
