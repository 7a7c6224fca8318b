#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames to run after the mock response arrives.
pub const SETTLE_FRAMES: usize = 10;

pub struct TestCtx<'a> {
    /// Must outlive the harness so the endpoint stays up.
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    /// App whose initial fetch returns `users_json()`.
    pub async fn new_app() -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(users_json())).await
    }

    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code).set_body_string("Uh oh")).await
    }

    pub async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Lets the mock server answer, then runs frames so the response reaches the table.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(200)).await;
        self.steps(SETTLE_FRAMES);
    }

    pub fn steps(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
        }
    }

    /// Emails in the order the table shows them.
    pub fn visible_emails(&self) -> Vec<String> {
        use roster_business::UserListActions as _;

        self.harness
            .state()
            .state()
            .ctx
            .visible_users()
            .iter()
            .map(|user| user.email.clone())
            .collect()
    }
}

/// Three users, deliberately out of order for every sortable column.
pub fn users_json() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Lucía", "last": "Vidal" },
                "location": { "city": "Zaragoza", "country": "Spain" },
                "email": "lucia.vidal@example.com",
                "picture": { "thumbnail": "" }
            },
            {
                "gender": "male",
                "name": { "title": "Mr", "first": "Aaron", "last": "Wilson" },
                "location": { "city": "Perth", "country": "Australia" },
                "email": "aaron.wilson@example.com",
                "picture": { "thumbnail": "" }
            },
            {
                "gender": "female",
                "name": { "title": "Mrs", "first": "Mette", "last": "Andersen" },
                "location": { "city": "Aarhus", "country": "Denmark" },
                "email": "mette.andersen@example.com",
                "picture": { "thumbnail": "" }
            }
        ],
        "info": { "seed": "roster", "results": 3, "page": 1, "version": "1.4" }
    })
}
