//! User list commands.
//!
//! Each command is a thin wrapper around a `UserListState` mutation. Commands that need an
//! argument read it from `UserListInput`, which the caller sets right before dispatching.

use log::{debug, info};
use roster_states::{Command, Dep, Updater};

use crate::{UserListInput, UserListState};

/// Flips `show_colors`.
#[derive(Debug, Default)]
pub struct ToggleColorsCommand;

impl Command for ToggleColorsCommand {
    fn run(&self, _deps: Dep<'_>, updater: Updater) {
        updater.update::<UserListState>(UserListState::toggle_colors);
    }
}

/// `Country` <-> `None`; any other criterion becomes `Country`.
#[derive(Debug, Default)]
pub struct ToggleSortByCountryCommand;

impl Command for ToggleSortByCountryCommand {
    fn run(&self, _deps: Dep<'_>, updater: Updater) {
        updater.update::<UserListState>(UserListState::toggle_sort_by_country);
    }
}

/// Sets the criterion from `UserListInput::sorting`.
#[derive(Debug, Default)]
pub struct SetSortingCommand;

impl Command for SetSortingCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let sorting = deps.get_state_ref::<UserListInput>().sorting;
        debug!("sorting users by {sorting:?}");
        updater.update::<UserListState>(move |state| state.set_sorting(sorting));
    }
}

/// Sets the country filter from `UserListInput::filter_country`.
#[derive(Debug, Default)]
pub struct SetFilterCountryCommand;

impl Command for SetFilterCountryCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let filter = deps.get_state_ref::<UserListInput>().filter_country.clone();
        updater.update::<UserListState>(move |state| state.set_filter_country(filter));
    }
}

/// Deletes the user whose email is `UserListInput::email`. Nothing happens without one.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some(email) = deps.get_state_ref::<UserListInput>().email else {
            debug!("DeleteUserCommand: no email set, skipping");
            return;
        };
        info!("deleting user {email}");
        updater.update::<UserListState>(move |state| state.delete_user(email.as_str()));
    }
}

/// Restores the working set from the pristine copy.
#[derive(Debug, Default)]
pub struct ResetUsersCommand;

impl Command for ResetUsersCommand {
    fn run(&self, _deps: Dep<'_>, updater: Updater) {
        info!("resetting users to the loaded list");
        updater.update::<UserListState>(UserListState::reset_users);
    }
}
