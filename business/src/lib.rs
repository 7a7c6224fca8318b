//! User list domain: load a batch of random users once, then filter, sort, delete and reset
//! them locally.
//!
//! Everything is registered in a `roster_states::StateCtx` by [`user_list_ctx`]; the UI
//! drives it through [`UserListActions`] and reads [`VisibleUsersCompute`] to render.

mod commands;
mod config;
mod controller;
mod fetch_service;
mod fetch_state;
mod filter;
mod load_users;
mod sort;
mod user;
mod user_list_state;
mod visible_users_compute;

pub use commands::{
    DeleteUserCommand, ResetUsersCommand, SetFilterCountryCommand, SetSortingCommand,
    ToggleColorsCommand, ToggleSortByCountryCommand,
};
pub use config::{BusinessConfig, ConfigError, DEFAULT_API_URL, DEFAULT_RESULTS, MAX_RESULTS};
pub use controller::{UserListActions, UserListIntent, user_list_ctx};
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
pub use fetch_state::FetchState;
pub use filter::{country_matches, filter_by_country};
pub use load_users::{
    FetchUsersError, LoadInitialUsersCommand, LoadUsersCompute, LoadUsersResult, decode_users,
};
pub use sort::{SortBy, locale_cmp, sort_users};
pub use user::{Location, Name, Picture, RandomUsersResponse, User};
pub use user_list_state::{UserListInput, UserListState};
pub use visible_users_compute::{FilteredUsersCompute, VisibleUsersCompute};
