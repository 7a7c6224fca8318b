use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};

use flume::Sender;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::{TaskHandle, TaskId};

type ApplyFn = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending change, applied by `StateCtx::sync_computes` on the UI thread.
pub(crate) enum Update {
    /// Replace the whole value registered under the type id.
    Assign(TypeId, &'static str, Box<dyn Any + Send>),
    /// Mutate the state registered under the type id in place.
    Apply(TypeId, &'static str, ApplyFn),
}

impl Update {
    pub(crate) fn target(&self) -> TypeId {
        match self {
            Self::Assign(id, _, _) | Self::Apply(id, _, _) => *id,
        }
    }

    pub(crate) fn target_name(&self) -> &'static str {
        match self {
            Self::Assign(_, name, _) | Self::Apply(_, name, _) => name,
        }
    }
}

/// An update tagged with the task that produced it, if any.
pub(crate) struct Posted {
    pub(crate) origin: Option<TaskId>,
    pub(crate) update: Update,
}

/// Posts results back into a `StateCtx`.
///
/// Cheap to clone and `Send`, so it can be moved into network callbacks. An updater handed
/// to a command carries that command's task: once the task is cancelled (the context was
/// dropped or the command re-dispatched) posts are dropped here, and anything already in
/// flight is dropped by the context when its generation is no longer current.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Posted>,
    origin: Option<TaskId>,
    cancel: Option<CancellationToken>,
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("origin", &self.origin)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl Updater {
    pub(crate) fn detached(send: Sender<Posted>) -> Self {
        Self {
            send,
            origin: None,
            cancel: None,
        }
    }

    pub(crate) fn for_task(send: Sender<Posted>, task: &TaskHandle) -> Self {
        Self {
            send,
            origin: Some(task.id()),
            cancel: Some(task.cancellation_token()),
        }
    }

    /// Replace the state or compute of type `T` with `value`.
    pub fn set<T: Any + Send>(&self, value: T) {
        self.post(Update::Assign(
            TypeId::of::<T>(),
            type_name::<T>(),
            Box::new(value),
        ));
    }

    /// Mutate the state of type `T` in place.
    pub fn update<T: Any>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let apply: ApplyFn = Box::new(move |any: &mut dyn Any| {
            if let Some(target) = any.downcast_mut::<T>() {
                f(target);
            }
        });
        self.post(Update::Apply(TypeId::of::<T>(), type_name::<T>(), apply));
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    fn post(&self, update: Update) {
        if self.is_cancelled() {
            debug!(
                "task cancelled, dropping update for {}",
                update.target_name()
            );
            return;
        }
        let posted = Posted {
            origin: self.origin,
            update,
        };
        if let Err(err) = self.send.send(posted) {
            debug!(
                "state context is gone, dropping update for {}",
                err.into_inner().update.target_name()
            );
        }
    }
}
