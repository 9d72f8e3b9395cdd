//! Login, refresh, and token-expiry flows

mod harness;

use std::time::Duration;

use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::Value;

async fn login(server: &TestServer, username: &str, password: &str) -> Value {
    let resp = server
        .client()
        .post(server.url("/api/login"))
        .json(&serde_json::json!({"username": username, "password": password}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn login_returns_a_token_pair() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let body = login(&server, "alice", "s3cret").await;

    assert_eq!(body["code"], "0");
    assert!(!body["data"]["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["data"]["refreshToken"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_password_renders_credential_mismatch() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let body = login(&server, "alice", "wrong").await;

    assert_eq!(body["code"], "1007");
    assert_eq!(body["message"], "Incorrect username or password");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn unknown_user_renders_the_same_credential_mismatch() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let body = login(&server, "mallory", "s3cret").await;

    assert_eq!(body["code"], "1007");
    assert_eq!(body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn access_token_grants_access_to_protected_route() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let body = login(&server, "alice", "s3cret").await;
    let access_token = body["data"]["accessToken"].as_str().unwrap();

    let resp = server
        .client()
        .get(server.url("/api/users/1"))
        .bearer_auth(access_token)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "0");
    assert_eq!(body["data"]["username"], "alice");
}

#[tokio::test]
async fn refresh_exchanges_for_a_working_pair() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let body = login(&server, "alice", "s3cret").await;
    let refresh_token = body["data"]["refreshToken"].as_str().unwrap();

    let resp = server
        .client()
        .post(server.url(&format!("/api/token/refresh?token={refresh_token}")))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "0");

    let access_token = body["data"]["accessToken"].as_str().unwrap();
    let resp = server
        .client()
        .get(server.url("/api/users/1"))
        .bearer_auth(access_token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "0");
}

#[tokio::test]
async fn access_token_is_rejected_by_the_refresh_endpoint() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let body = login(&server, "alice", "s3cret").await;
    let access_token = body["data"]["accessToken"].as_str().unwrap();

    let resp = server
        .client()
        .post(server.url(&format!("/api/token/refresh?token={access_token}")))
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "1001");
    assert_eq!(body["message"], "token is not valid for this operation");
}

#[tokio::test]
async fn expired_tokens_report_their_kind() {
    let config = ConfigBuilder::new()
        .with_access_ttl_secs(1)
        .with_refresh_ttl_secs(1)
        .build();
    let server = TestServer::start(&config).await.unwrap();

    let body = login(&server, "alice", "s3cret").await;
    let access_token = body["data"]["accessToken"].as_str().unwrap().to_owned();
    let refresh_token = body["data"]["refreshToken"].as_str().unwrap().to_owned();

    tokio::time::sleep(Duration::from_millis(2100)).await;

    let resp = server
        .client()
        .get(server.url("/api/users/1"))
        .bearer_auth(&access_token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "1008");
    assert_eq!(body["message"], "Access token has expired");

    let resp = server
        .client()
        .post(server.url(&format!("/api/token/refresh?token={refresh_token}")))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "1009");
    assert_eq!(body["message"], "Refresh token has expired, please log in again");
}

#[tokio::test]
async fn garbage_bearer_token_falls_back_to_unclassified() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/api/users/1"))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "1001");
    assert_eq!(body["message"], "malformed token");
}
