//! Task bookkeeping for dispatched commands.
//!
//! Every dispatch gets a [`TaskHandle`]: a [`TaskId`] (command type + generation) and a
//! `CancellationToken` shared with the command's [`Updater`](crate::Updater). The context
//! keeps only the latest handle per command type, cancelling the previous one, and cancels
//! everything when it is dropped. A callback that completes after that point finds its
//! updater cancelled and its result is discarded.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies one dispatch of a command.
///
/// Two dispatches of the same command share a `type_id` and differ in `generation`;
/// the higher generation is the more recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to an in-flight command with cooperative cancellation.
///
/// Cancelling does not abort any work already running; it only guarantees that nothing
/// the task posts afterwards reaches the context.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_equality_considers_type_and_generation() {
        let id1 = TaskId::new(TypeId::of::<String>(), 1);
        let id2 = TaskId::new(TypeId::of::<String>(), 1);
        let id3 = TaskId::new(TypeId::of::<String>(), 2);
        let id4 = TaskId::new(TypeId::of::<i32>(), 1);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_ne!(id1, id4);
        assert_eq!(id3.generation(), 2);
        assert_eq!(id4.type_id(), TypeId::of::<i32>());
    }

    #[test]
    fn cancel_is_shared_with_cloned_tokens() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let clone = handle.clone();

        assert!(!token.is_cancelled());
        clone.cancel();

        assert!(handle.is_cancelled());
        assert!(token.is_cancelled());
    }
}
