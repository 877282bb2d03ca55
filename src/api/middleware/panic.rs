//! Turns a panicking handler into a translated 500 instead of a dropped
//! connection.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::api::errors::ApiError;

/// Response for `CatchPanicLayer::custom`
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::internal_server_error("Internal server error").into_response()
}
