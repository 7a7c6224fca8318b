//! Wiring: builds a fully registered `StateCtx` and exposes the user list operations on it.

use log::error;
use roster_states::StateCtx;
use ustr::Ustr;

use crate::{
    BusinessConfig, DeleteUserCommand, FetchState, FilteredUsersCompute, LoadInitialUsersCommand,
    LoadUsersCompute, ResetUsersCommand, SetFilterCountryCommand, SetSortingCommand, SortBy,
    ToggleColorsCommand, ToggleSortByCountryCommand, User, UserListInput, UserListState,
    VisibleUsersCompute,
};

/// A user action coming from inside the table (header click, row button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListIntent {
    Sort(SortBy),
    Delete(Ustr),
}

/// Registers every user list state, compute and command.
pub fn user_list_ctx(config: BusinessConfig, fetch: FetchState) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(fetch);
    ctx.add_state(UserListState::default());
    ctx.add_state(UserListInput::default());

    ctx.record_compute(LoadUsersCompute::default());
    ctx.record_compute(FilteredUsersCompute::default());
    ctx.record_compute(VisibleUsersCompute::default());

    ctx.record_command(LoadInitialUsersCommand);
    ctx.record_command(ToggleColorsCommand);
    ctx.record_command(ToggleSortByCountryCommand);
    ctx.record_command(SetSortingCommand);
    ctx.record_command(SetFilterCountryCommand);
    ctx.record_command(DeleteUserCommand);
    ctx.record_command(ResetUsersCommand);

    if let Err(err) = ctx.verify_deps() {
        error!("user list dependencies are inconsistent: {err}");
    }

    ctx
}

/// User list operations on a context built by [`user_list_ctx`].
///
/// Every operation dispatches right away; derived views catch up on the next
/// `run_computed`.
pub trait UserListActions {
    /// Starts the initial fetch. Returns immediately.
    fn load_initial_users(&mut self);
    fn toggle_colors(&mut self);
    fn toggle_sort_by_country(&mut self);
    fn set_sorting(&mut self, sorting: SortBy);
    fn set_filter_country(&mut self, filter: &str);
    fn delete_user(&mut self, email: &str);
    fn reset_users(&mut self);
    fn apply_intent(&mut self, intent: UserListIntent);

    fn user_list(&self) -> &UserListState;
    /// Rows to render, empty before the first `run_computed`.
    fn visible_users(&self) -> &[User];
}

impl UserListActions for StateCtx {
    fn load_initial_users(&mut self) {
        self.dispatch::<LoadInitialUsersCommand>();
    }

    fn toggle_colors(&mut self) {
        self.dispatch::<ToggleColorsCommand>();
    }

    fn toggle_sort_by_country(&mut self) {
        self.dispatch::<ToggleSortByCountryCommand>();
    }

    fn set_sorting(&mut self, sorting: SortBy) {
        self.update::<UserListInput>(|input| input.sorting = sorting);
        self.dispatch::<SetSortingCommand>();
    }

    fn set_filter_country(&mut self, filter: &str) {
        self.update::<UserListInput>(|input| input.filter_country = filter.to_string());
        self.dispatch::<SetFilterCountryCommand>();
    }

    fn delete_user(&mut self, email: &str) {
        self.update::<UserListInput>(|input| input.email = Some(Ustr::from(email)));
        self.dispatch::<DeleteUserCommand>();
    }

    fn reset_users(&mut self) {
        self.dispatch::<ResetUsersCommand>();
    }

    fn apply_intent(&mut self, intent: UserListIntent) {
        match intent {
            UserListIntent::Sort(sorting) => self.set_sorting(sorting),
            UserListIntent::Delete(email) => self.delete_user(email.as_str()),
        }
    }

    fn user_list(&self) -> &UserListState {
        self.state::<UserListState>()
    }

    fn visible_users(&self) -> &[User] {
        self.cached::<VisibleUsersCompute>()
            .map(|visible| visible.users.as_slice())
            .unwrap_or_default()
    }
}
