use std::any::Any;

use crate::{Dep, Updater};

/// A manual-only action, run via `StateCtx::dispatch`.
///
/// Commands read their inputs through [`Dep`] and publish every change through the
/// [`Updater`]. Updates posted synchronously are applied before `dispatch` returns; updates
/// posted later (from an async callback) are applied on the next `sync_computes`, unless
/// the command was cancelled in between.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
