use std::any::Any;

use log::info;
use roster_states::{State, state_assign_impl};
use serde::Deserialize;
use thiserror::Error;

/// Default random user service endpoint.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// How many users a load requests.
pub const DEFAULT_RESULTS: u32 = 100;

/// Upper bound the service accepts for `results`.
pub const MAX_RESULTS: u32 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment: {0}")]
    Env(String),
    #[error("ROSTER_RESULTS must be between 1 and {MAX_RESULTS}, got {0}")]
    Results(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_url: String,
    pub results: u32,
}

// Every variable is optional; unset ones fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_url: Option<String>,
    roster_results: Option<u32>,
}

impl BusinessConfig {
    /// Points at `api_url` with the default batch size.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            results: DEFAULT_RESULTS,
        }
    }

    pub fn with_results(mut self, results: u32) -> Self {
        self.results = results;
        self
    }

    /// Reads `ROSTER_API_URL` and `ROSTER_RESULTS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|err| ConfigError::Env(err.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            roster_api_url,
            roster_results,
        } = raw;

        let results = roster_results.unwrap_or(DEFAULT_RESULTS);
        if !(1..=MAX_RESULTS).contains(&results) {
            return Err(ConfigError::Results(results));
        }

        let config = Self {
            api_url: roster_api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            results,
        };
        info!("user service: {} ({} users)", config.api_url, config.results);
        Ok(config)
    }

    /// `api_url` with the `results` query parameter appended.
    pub fn users_url(&self) -> String {
        let separator = if self.api_url.contains('?') { '&' } else { '?' };
        format!("{}{}results={}", self.api_url, separator, self.results)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
