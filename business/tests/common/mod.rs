//! Shared helpers: an in-process fetcher that holds requests until the test answers them.

#![allow(dead_code)]

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};

use roster_business::{BusinessConfig, FetchService, FetchState, OnDone, User, user_list_ctx};
use roster_states::StateCtx;

#[derive(Default)]
pub struct MockFetcher {
    pending: Mutex<Vec<(String, OnDone)>>,
}

impl Debug for MockFetcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFetcher")
            .field("pending", &self.pending_count())
            .finish()
    }
}

impl FetchService for MockFetcher {
    fn fetch(&self, request: ehttp::Request, on_done: OnDone) {
        self.pending
            .lock()
            .expect("mock fetcher lock")
            .push((request.url, on_done));
    }
}

impl MockFetcher {
    pub fn pending_count(&self) -> usize {
        self.pending.lock().expect("mock fetcher lock").len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.pending
            .lock()
            .expect("mock fetcher lock")
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Answers the oldest pending request.
    pub fn respond(&self, result: ehttp::Result<ehttp::Response>) {
        let (_, on_done) = self
            .pending
            .lock()
            .expect("mock fetcher lock")
            .remove(0);
        on_done(result);
    }

    pub fn respond_with_users(&self, users: &[User]) {
        self.respond(Ok(ok_response(users)));
    }
}

pub fn ok_response(users: &[User]) -> ehttp::Response {
    let body = serde_json::json!({ "results": users, "info": { "results": users.len() } });
    response(200, body.to_string().into_bytes())
}

pub fn response(status: u16, bytes: Vec<u8>) -> ehttp::Response {
    ehttp::Response {
        url: "http://mock/api/?results=100".to_string(),
        ok: (200..300).contains(&status),
        status,
        status_text: String::new(),
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
        bytes,
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("zoe@x.com", "Zoe", "Brown", "Norway", "https://x/1.jpg"),
        User::new("adam@x.com", "adam", "Smith", "Brazil", "https://x/2.jpg"),
        User::new("emile@x.com", "Émile", "Dupont", "France", "https://x/3.jpg"),
        User::new("bob@x.com", "Bob", "anderson", "Australia", "https://x/4.jpg"),
        User::new("ines@x.com", "Inés", "García", "Spain", "https://x/5.jpg"),
    ]
}

pub fn emails(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.email.as_str()).collect()
}

/// Context wired to a fresh mock fetcher.
pub fn mock_ctx() -> (StateCtx, Arc<MockFetcher>) {
    let fetcher = Arc::new(MockFetcher::default());
    let ctx = user_list_ctx(
        BusinessConfig::new("http://mock/api/"),
        FetchState {
            inner: fetcher.clone(),
        },
    );
    (ctx, fetcher)
}

/// Applies posted updates and re-runs the derived views, like the end of a UI frame.
pub fn settle(ctx: &mut StateCtx) {
    ctx.sync_computes();
    ctx.run_computed();
}

/// Context that already holds `sample_users()`.
pub fn loaded_ctx() -> StateCtx {
    let (mut ctx, fetcher) = mock_ctx();
    roster_business::UserListActions::load_initial_users(&mut ctx);
    fetcher.respond_with_users(&sample_users());
    settle(&mut ctx);
    ctx
}
