use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::updater::{Posted, Update};
use crate::{
    Command, Compute, Dep, Error, Graph, State, StateSyncStatus, TaskHandle, TaskId,
    TopologyError, Updater,
};

pub(crate) struct StateSlot {
    pub(crate) name: &'static str,
    pub(crate) value: Box<dyn State>,
}

pub(crate) struct ComputeSlot {
    pub(crate) name: &'static str,
    pub(crate) value: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

struct CommandSlot {
    name: &'static str,
    value: Box<dyn Command>,
}

/// Owns every state, compute and command of the app.
///
/// Frame loop, in order:
/// 1. `sync_computes()` applies everything posted through updaters since the last frame.
/// 2. The UI reads via `state::<T>()` / `cached::<T>()`. Intents write their arguments with
///    `update::<T>()` and then `dispatch::<C>()`, so each command sees its own input.
/// 3. `run_computed()` at the end of the frame.
pub struct StateCtx {
    states: BTreeMap<TypeId, StateSlot>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    commands: BTreeMap<TypeId, CommandSlot>,

    graph: Graph<TypeId>,
    compute_order: Vec<TypeId>,

    tasks: BTreeMap<TypeId, TaskHandle>,
    generation: u64,

    send: Sender<Posted>,
    recv: Receiver<Posted>,
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field(
                "states",
                &self.states.values().map(|s| s.name).collect::<Vec<_>>(),
            )
            .field(
                "computes",
                &self
                    .computes
                    .values()
                    .map(|c| (c.name, c.status))
                    .collect::<Vec<_>>(),
            )
            .field(
                "commands",
                &self.commands.values().map(|c| c.name).collect::<Vec<_>>(),
            )
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.cancel();
        }
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            graph: Graph::new(),
            compute_order: Vec::new(),
            tasks: BTreeMap::new(),
            generation: 0,
            send,
            recv,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(
            id,
            StateSlot {
                name: type_name::<T>(),
                value: Box::new(state),
            },
        );
        self.mark_dependents_dirty(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_deps, compute_deps) = compute.deps();
        for dep in state_deps.into_iter().chain(compute_deps) {
            self.graph.route_to(dep, id, ());
        }

        self.computes.insert(
            id,
            ComputeSlot {
                name: type_name::<T>(),
                value: Box::new(compute),
                status: StateSyncStatus::Init,
            },
        );

        self.rebuild_compute_order();
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(
            TypeId::of::<C>(),
            CommandSlot {
                name: type_name::<C>(),
                value: Box::new(command),
            },
        );
    }

    /// Checks the dependency graph for cycles and duplicate edges.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    fn rebuild_compute_order(&mut self) {
        let sorted = match self.graph.topology_sort() {
            Ok(sorted) => sorted,
            Err(err) => {
                error!("invalid compute dependencies, falling back to registration order: {err}");
                Vec::new()
            }
        };

        let mut order: Vec<TypeId> = sorted
            .into_iter()
            .filter(|id| self.computes.contains_key(id))
            .collect();
        for id in self.computes.keys() {
            if !order.contains(id) {
                order.push(*id);
            }
        }
        self.compute_order = order;
    }

    /// An updater without a cancellation token, for callers outside the command system.
    pub fn updater(&self) -> Updater {
        Updater::detached(self.send.clone())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.dep().try_state::<T>()
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.dep().get_state_ref::<T>()
    }

    /// Mutates a state in place and marks its dependents dirty.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        let id = TypeId::of::<T>();
        match self
            .states
            .get_mut(&id)
            .and_then(|slot| slot.value.as_any_mut().downcast_mut::<T>())
        {
            Some(state) => f(state),
            None => {
                warn!("update on unregistered state {}", type_name::<T>());
                return;
            }
        }
        self.mark_dependents_dirty(id);
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.dep().try_compute::<T>().ok()
    }

    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes
            .get(&TypeId::of::<T>())
            .map(|slot| slot.status)
    }

    /// Runs a command immediately and applies whatever it posted synchronously.
    pub fn dispatch<C: Command>(&mut self) {
        let id = TypeId::of::<C>();
        let Some(command) = self.commands.get(&id) else {
            warn!("dispatch of unregistered command {}", type_name::<C>());
            return;
        };

        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(id, self.generation),
            CancellationToken::new(),
        );
        if let Some(previous) = self.tasks.insert(id, handle.clone()) {
            debug!(
                "{} re-dispatched, cancelling generation {}",
                command.name,
                previous.id().generation()
            );
            previous.cancel();
        }

        debug!("dispatching {}", command.name);
        let updater = Updater::for_task(self.send.clone(), &handle);
        command
            .value
            .run(Dep::new(&self.states, &self.computes), updater);

        self.sync_computes();
    }

    /// The handle of the latest dispatch of `C`, if any.
    pub fn task<C: Command>(&self) -> Option<&TaskHandle> {
        self.tasks.get(&TypeId::of::<C>())
    }

    /// Applies every update posted since the last call.
    pub fn sync_computes(&mut self) {
        while let Ok(Posted { origin, update }) = self.recv.try_recv() {
            if let Some(origin) = origin
                && !self.is_current(origin)
            {
                debug!(
                    "dropping update for {} from stale generation {}",
                    update.target_name(),
                    origin.generation()
                );
                continue;
            }

            let id = update.target();
            if self.apply_update(update) {
                self.mark_dependents_dirty(id);
            }
        }
    }

    fn is_current(&self, task: TaskId) -> bool {
        self.tasks
            .get(&task.type_id())
            .is_some_and(|handle| handle.id() == task && !handle.is_cancelled())
    }

    fn apply_update(&mut self, update: Update) -> bool {
        match update {
            Update::Assign(id, name, value) => {
                if let Some(slot) = self.states.get_mut(&id) {
                    slot.value.assign_box(value);
                } else if let Some(slot) = self.computes.get_mut(&id) {
                    slot.value.assign_box(value);
                    slot.status = StateSyncStatus::Clean;
                } else {
                    warn!("dropping update for unregistered {name}");
                    return false;
                }
                true
            }
            Update::Apply(id, name, apply) => match self.states.get_mut(&id) {
                Some(slot) => {
                    apply(slot.value.as_any_mut());
                    true
                }
                None => {
                    warn!("dropping in-place update for unregistered state {name}");
                    false
                }
            },
        }
    }

    /// Re-runs every compute that is not clean, in dependency order.
    pub fn run_computed(&mut self) {
        let order = self.compute_order.clone();
        for id in order {
            let Some(slot) = self.computes.get(&id) else {
                continue;
            };
            if !slot.status.needs_run() {
                continue;
            }

            slot.value.compute(
                Dep::new(&self.states, &self.computes),
                Updater::detached(self.send.clone()),
            );
            if let Some(slot) = self.computes.get_mut(&id) {
                slot.status = StateSyncStatus::Clean;
            }
            // Apply right away so later computes in the order see the new value.
            self.sync_computes();
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let dependents: Vec<TypeId> = self.graph.connected(id).copied().collect();
        for dependent in dependents {
            if let Some(slot) = self.computes.get_mut(&dependent) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }

    fn dep(&self) -> Dep<'_> {
        Dep::new(&self.states, &self.computes)
    }
}
