//! Integration tests for the cross-cutting request pipeline
//!
//! Security headers, CORS preflights, rate limiting and diagnostics routes.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{register, send, send_request, setup_app};
use serde_json::json;

#[tokio::test]
async fn test_security_headers_on_success_response() {
    let app = setup_app(&[]);
    let (_, token) = register(&app, "headers@test.com").await;

    let response = send(&app, Method::GET, "/cards", Some(&token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
    assert_eq!(response.headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(response.headers["referrer-policy"], "no-referrer");
    assert!(response.headers.contains_key("content-security-policy"));
    assert!(response.headers.contains_key("strict-transport-security"));
}

#[tokio::test]
async fn test_security_headers_on_error_response() {
    let app = setup_app(&[]);

    let response = send(&app, Method::GET, "/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
    assert_eq!(response.headers["cross-origin-opener-policy"], "same-origin");
}

#[tokio::test]
async fn test_cors_preflight_bypasses_authentication() {
    let app = setup_app(&[]);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/cards")
        .header("origin", "https://around.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "authorization,content-type")
        .body(Body::empty())
        .unwrap();
    let response = send_request(&app, request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["access-control-allow-origin"], "*");
    assert!(response
        .headers
        .contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_cors_header_on_simple_request() {
    let app = setup_app(&[]);

    let request = Request::builder()
        .method("POST")
        .uri("/signin")
        .header("origin", "https://around.example.com")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "email": "nobody@test.com", "password": "x" }).to_string(),
        ))
        .unwrap();
    let response = send_request(&app, request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_rate_limit_headers_on_every_response() {
    let app = setup_app(&[("RATE_LIMIT_MAX", "5")]);

    let response = send(&app, Method::GET, "/cards", None, None).await;

    assert_eq!(response.headers["ratelimit-limit"], "5");
    assert_eq!(response.headers["ratelimit-remaining"], "4");
    assert!(response.headers.contains_key("ratelimit-reset"));
    assert!(!response.headers.contains_key("retry-after"));
}

#[tokio::test]
async fn test_rate_limit_refuses_after_max_requests() {
    let app = setup_app(&[("RATE_LIMIT_MAX", "2"), ("RATE_LIMIT_WINDOW_SECS", "60")]);

    for _ in 0..2 {
        let response = send(&app, Method::GET, "/cards", None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let refused = send(&app, Method::GET, "/cards", None, None).await;

    assert_eq!(refused.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        refused.json,
        json!({
            "message": "caught RateLimitError error: Too many requests, please try again later."
        })
    );
    assert_eq!(refused.headers["ratelimit-remaining"], "0");
    assert_eq!(refused.headers["retry-after"], "60");
    assert_eq!(refused.headers["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn test_crash_test_route_absent_by_default() {
    let app = setup_app(&[]);

    let unauthenticated = send(&app, Method::GET, "/crash-test", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);

    let (_, token) = register(&app, "crash@test.com").await;
    let authenticated = send(&app, Method::GET, "/crash-test", Some(&token), None).await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_route_wrong_method_is_translated() {
    let app = setup_app(&[]);

    for uri in ["/signin", "/signup"] {
        let response = send(&app, Method::GET, uri, None, None).await;

        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.json,
            json!({
                "message": format!(
                    "caught MethodNotAllowedError error: GET is not supported on {}",
                    uri
                )
            })
        );
        assert_eq!(response.headers["x-content-type-options"], "nosniff");
    }
}
