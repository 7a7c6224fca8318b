use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Callback invoked once with the outcome of a request, possibly on another thread.
pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// Seam between commands and the network, so tests can answer requests in-process.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

/// Real HTTP via `ehttp` (background thread on native, `fetch()` on wasm).
#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done);
    }
}
