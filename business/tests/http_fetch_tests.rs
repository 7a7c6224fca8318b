//! Loads users over real HTTP against a local mock server.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use roster_business::{
    BusinessConfig, FetchState, LoadUsersCompute, User, UserListActions, user_list_ctx,
};
use roster_states::StateCtx;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users() -> Vec<User> {
    vec![
        User::new("ann@x.com", "Ann", "Lee", "Spain", "https://x/ann.jpg"),
        User::new("ben@x.com", "Ben", "Kim", "Korea", "https://x/ben.jpg"),
    ]
}

async fn wait_until_settled(ctx: &mut StateCtx) {
    for _ in 0..100 {
        ctx.sync_computes();
        ctx.run_computed();
        if ctx
            .cached::<LoadUsersCompute>()
            .is_some_and(|status| !status.is_pending())
        {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn test_load_over_http() {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": users() })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = user_list_ctx(
        BusinessConfig::new(format!("{}/api/", server.uri())),
        FetchState::default(),
    );
    ctx.load_initial_users();
    wait_until_settled(&mut ctx).await;

    assert!(ctx.cached::<LoadUsersCompute>().unwrap().is_loaded());
    assert_eq!(ctx.user_list().users(), users().as_slice());
    assert_eq!(ctx.visible_users().len(), 2);
}

#[tokio::test]
async fn test_server_error_leaves_list_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Uh oh"))
        .mount(&server)
        .await;

    let mut ctx = user_list_ctx(
        BusinessConfig::new(format!("{}/api/", server.uri())),
        FetchState::default(),
    );
    ctx.load_initial_users();
    wait_until_settled(&mut ctx).await;

    let status = ctx.cached::<LoadUsersCompute>().unwrap();
    assert!(status.error_message().is_some());
    assert!(ctx.user_list().users().is_empty());
}
