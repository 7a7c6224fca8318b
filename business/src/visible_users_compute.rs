//! Derived views of `UserListState`: filtered, then sorted.
//!
//! Both are plain computes; they re-run whenever the state (or the filtered list) changes,
//! so deleting or resetting users while a filter or sort is active keeps the view in sync.

use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::{User, UserListState, filter_by_country, sort_users};

/// Working users whose country matches the current filter, in working order.
#[derive(Debug, Default, Clone)]
pub struct FilteredUsersCompute {
    pub users: Vec<User>,
}

impl Compute for FilteredUsersCompute {
    fn deps(&self) -> ComputeDeps {
        (vec![TypeId::of::<UserListState>()], vec![])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let state = deps.get_state_ref::<UserListState>();
        updater.set(Self {
            users: filter_by_country(state.users(), state.filter_country()),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// The rows the table shows: the filtered users ordered by the current sort criterion.
#[derive(Debug, Default, Clone)]
pub struct VisibleUsersCompute {
    pub users: Vec<User>,
}

impl VisibleUsersCompute {
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Compute for VisibleUsersCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<UserListState>()],
            vec![TypeId::of::<FilteredUsersCompute>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let sorting = deps.get_state_ref::<UserListState>().sorting();
        let filtered = deps.get_compute_ref::<FilteredUsersCompute>();
        updater.set(Self {
            users: sort_users(&filtered.users, sorting),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
