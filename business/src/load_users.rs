//! Initial users load: command + compute-shaped status cache.
//!
//! Fetching is a side effect, so it lives in `LoadInitialUsersCommand` and never in a
//! compute. The command posts the users straight into `UserListState` (users and the
//! pristine copy in one update) and reports progress through `LoadUsersCompute`.
//!
//! The command does not block: `dispatch` returns as soon as the request is sent, and the
//! response is applied by a later `sync_computes`. If the context is dropped, or the
//! command dispatched again before the response arrives, the stale result is discarded.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use roster_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};
use thiserror::Error;

use crate::{BusinessConfig, FetchState, RandomUsersResponse, User, UserListState};

#[derive(Debug, Error)]
pub enum FetchUsersError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid users payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turns a raw `ehttp` result into the fetched users.
pub fn decode_users(result: ehttp::Result<ehttp::Response>) -> Result<Vec<User>, FetchUsersError> {
    let response = result.map_err(FetchUsersError::Request)?;
    if !response.ok {
        return Err(FetchUsersError::Status(response.status));
    }
    let body: RandomUsersResponse = serde_json::from_slice(&response.bytes)?;
    Ok(body.results)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadUsersResult {
    /// No load attempted yet.
    #[default]
    Idle,
    /// Request sent, waiting for the response.
    Pending,
    Loaded {
        count: usize,
        at: DateTime<Utc>,
    },
    Failed(String),
}

/// Status of the last load. Updated only by `LoadInitialUsersCommand`.
#[derive(Debug, Clone, Default)]
pub struct LoadUsersCompute {
    pub result: LoadUsersResult,
}

impl LoadUsersCompute {
    pub fn is_pending(&self) -> bool {
        matches!(self.result, LoadUsersResult::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.result, LoadUsersResult::Loaded { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            LoadUsersResult::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Compute for LoadUsersCompute {
    fn deps(&self) -> ComputeDeps {
        (vec![], vec![])
    }

    // No-op: the command owns this value.
    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches `BusinessConfig::results` users and stores them as the working set and the
/// pristine copy. On failure both stay empty and the error is logged. Does nothing once
/// users are loaded.
#[derive(Debug, Default)]
pub struct LoadInitialUsersCommand;

impl Command for LoadInitialUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        // The pristine copy is set once; a later batch could never be stored.
        if deps.get_state_ref::<UserListState>().is_loaded() {
            warn!("LoadInitialUsersCommand: users already loaded, skipping fetch");
            return;
        }

        let config = deps.get_state_ref::<BusinessConfig>();
        let fetcher = deps.get_state_ref::<FetchState>().inner.clone();

        let url = config.users_url();
        info!("LoadInitialUsersCommand: fetching users from {url}");

        updater.set(LoadUsersCompute {
            result: LoadUsersResult::Pending,
        });

        let request = ehttp::Request::get(&url);
        fetcher.fetch(
            request,
            Box::new(move |result| match decode_users(result) {
                Ok(users) => {
                    let count = users.len();
                    info!("LoadInitialUsersCommand: fetched {count} users");
                    updater.update::<UserListState>(move |state| {
                        state.load(users);
                    });
                    updater.set(LoadUsersCompute {
                        result: LoadUsersResult::Loaded {
                            count,
                            at: Utc::now(),
                        },
                    });
                }
                Err(err) => {
                    error!("LoadInitialUsersCommand: {err}");
                    updater.set(LoadUsersCompute {
                        result: LoadUsersResult::Failed(err.to_string()),
                    });
                }
            }),
        );
    }
}
