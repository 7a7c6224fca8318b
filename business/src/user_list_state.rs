//! State of the user list: the working set, the pristine copy and the view settings.
//!
//! The pure mutations live here as methods so they can be tested without a `StateCtx`;
//! the commands in `commands.rs` are thin wrappers that apply them through an `Updater`.

use std::any::Any;

use log::{info, warn};
use roster_states::State;
use ustr::Ustr;

use crate::{SortBy, User};

/// Authoritative user list state.
///
/// `original_users` is filled exactly once, by the first successful load, and is the only
/// source `reset_users` restores from.
#[derive(Debug, Default)]
pub struct UserListState {
    users: Vec<User>,
    original_users: Option<Vec<User>>,
    show_colors: bool,
    sorting: SortBy,
    filter_country: Option<String>,
}

impl State for UserListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fetched batch as both the working set and the pristine copy.
    ///
    /// Returns `false` and leaves the state untouched if a batch was already stored.
    pub fn load(&mut self, users: Vec<User>) -> bool {
        if self.original_users.is_some() {
            warn!(
                "ignoring a second batch of {} users, the pristine copy is already set",
                users.len()
            );
            return false;
        }
        info!("storing {} fetched users", users.len());
        self.users = users.clone();
        self.original_users = Some(users);
        true
    }

    pub fn toggle_colors(&mut self) {
        self.show_colors = !self.show_colors;
    }

    /// `Country` goes back to `None`; any other criterion becomes `Country`.
    pub fn toggle_sort_by_country(&mut self) {
        self.sorting = if self.sorting == SortBy::Country {
            SortBy::None
        } else {
            SortBy::Country
        };
    }

    pub fn set_sorting(&mut self, sorting: SortBy) {
        self.sorting = sorting;
    }

    /// Stores the filter verbatim. An empty string means no filter.
    pub fn set_filter_country(&mut self, filter: impl Into<String>) {
        self.filter_country = Some(filter.into());
    }

    /// Removes the user with this email from the working set. No-op if absent.
    pub fn delete_user(&mut self, email: &str) {
        self.users.retain(|user| user.email != email);
    }

    /// Restores the working set from the pristine copy. View settings are kept.
    pub fn reset_users(&mut self) {
        self.users = self.original_users.clone().unwrap_or_default();
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn original_users(&self) -> &[User] {
        self.original_users.as_deref().unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.original_users.is_some()
    }

    pub fn show_colors(&self) -> bool {
        self.show_colors
    }

    pub fn sorting(&self) -> SortBy {
        self.sorting
    }

    pub fn filter_country(&self) -> Option<&str> {
        self.filter_country.as_deref()
    }
}

/// Arguments for the user list commands.
///
/// UI sets the relevant field via `ctx.update::<UserListInput>(...)` before dispatching.
#[derive(Debug, Clone, Default)]
pub struct UserListInput {
    /// For `SetSortingCommand`.
    pub sorting: SortBy,
    /// For `SetFilterCountryCommand`.
    pub filter_country: String,
    /// For `DeleteUserCommand`.
    pub email: Option<Ustr>,
}

impl State for UserListInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
