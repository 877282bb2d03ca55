//! Shared helpers for HTTP integration tests
//!
//! Every test builds its own app on in-memory repositories, so tests are
//! isolated and need no database.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use around_api::api::router;
use around_api::config::Config;
use around_api::infrastructure::repositories::{InMemoryCardRepository, InMemoryUserRepository};
use around_api::state::AppState;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration for tests: in-memory storage, cheap hashing, generous rate limit
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("STORAGE_BACKEND", "memory"),
        ("JWT_SECRET", TEST_SECRET),
        ("BCRYPT_COST", "4"),
        ("RATE_LIMIT_MAX", "1000"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        vars.insert(k.to_string(), v.to_string());
    }

    Config::from_lookup(|name| vars.get(name).cloned()).expect("valid test config")
}

/// Setup test application with in-memory repositories
pub fn setup_app(overrides: &[(&str, &str)]) -> Router {
    let config = test_config(overrides);
    let state = AppState::new(
        &config,
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryCardRepository::new()),
    );
    router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    /// The `message` field of an error body
    pub fn message(&self) -> &str {
        self.json["message"].as_str().unwrap_or_default()
    }
}

/// Sends a request; `body` is sent as JSON when present
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Registers a user and returns their `_id`
pub async fn sign_up(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/signup",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);

    response.json["_id"].as_str().unwrap().to_string()
}

/// Signs in and returns the token
pub async fn sign_in(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/signin",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.json);

    response.json["token"].as_str().unwrap().to_string()
}

/// Registers and signs in a user, returning `(user_id, token)`
pub async fn register(app: &Router, email: &str) -> (String, String) {
    let password = "correct-horse-battery";
    let user_id = sign_up(app, email, password).await;
    let token = sign_in(app, email, password).await;
    (user_id, token)
}
