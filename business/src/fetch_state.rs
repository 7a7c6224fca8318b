use std::any::Any;
use std::sync::Arc;

use roster_states::State;

use crate::{EhttpFetcher, FetchService};

/// The fetcher commands use for network IO.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(fetcher: impl FetchService + 'static) -> Self {
        Self {
            inner: Arc::new(fetcher),
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(EhttpFetcher)
    }
}

impl State for FetchState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
