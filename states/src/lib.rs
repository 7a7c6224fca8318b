//! Reactive state context for the roster app.
//!
//! Three kinds of values live in a [`StateCtx`]:
//! - [`State`]: plain data owned by the context and mutated explicitly.
//! - [`Compute`]: values derived from states and other computes. A compute is re-run
//!   whenever one of its dependencies changes, in dependency order.
//! - [`Command`]: manual-only actions. Side effects (network IO) belong here, never in a
//!   compute, because computes run implicitly.
//!
//! Results flow back through an [`Updater`], which posts into a `flume` channel that the
//! context drains on the UI thread (`sync_computes`). This lets async callbacks running on
//! other threads hand over results without touching the context directly.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;
