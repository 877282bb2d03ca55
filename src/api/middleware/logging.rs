//! Error logging stage.
//!
//! Runs after routing: the translator leaves an [`ErrorRecord`] on every
//! error response, and this stage reports it. Request/response lines come
//! from `tower_http::trace::TraceLayer`.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::api::errors::ErrorRecord;

pub async fn log_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    if let Some(record) = response.extensions().get::<ErrorRecord>() {
        let status = response.status();
        if status.is_server_error() {
            tracing::error!(
                %method,
                %path,
                status = status.as_u16(),
                kind = %record.kind,
                message = %record.message,
                "request failed"
            );
        } else {
            tracing::warn!(
                %method,
                %path,
                status = status.as_u16(),
                kind = %record.kind,
                message = %record.message,
                "request rejected"
            );
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn passes_responses_through_unchanged() {
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route(
                "/fail",
                get(|| async { Err::<(), _>(ApiError::not_found("nothing here")) }),
            )
            .layer(middleware::from_fn(log_errors));

        let ok = app
            .clone()
            .oneshot(Request::builder().uri("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let failed = app
            .oneshot(Request::builder().uri("/fail").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(failed.status(), StatusCode::NOT_FOUND);
        assert!(failed.extensions().get::<ErrorRecord>().is_some());
    }
}
