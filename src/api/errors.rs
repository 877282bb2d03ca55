//! Centralized error translation.
//!
//! Every failure a handler, extractor or middleware produces is an
//! [`ApiError`]. Turning it into a response is the last step of the request:
//! the status is resolved from the error's explicit status hint or, failing
//! that, from its category, and the body is always
//! `{ "message": "caught <category> error: <message>" }`.

use std::borrow::Cow;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::jwt::TokenError;
use crate::domain::repositories::RepositoryError;

/// Category names carried by [`ApiError::kind`]
pub mod kind {
    pub const VALIDATION: &str = "ValidationError";
    pub const JSON_WEB_TOKEN: &str = "JsonWebTokenError";
    pub const TOKEN_EXPIRED: &str = "TokenExpiredError";
    pub const UNAUTHORIZED: &str = "UnauthorizedError";
    pub const FORBIDDEN: &str = "ForbiddenError";
    pub const NOT_FOUND: &str = "NotFoundError";
    pub const METHOD_NOT_ALLOWED: &str = "MethodNotAllowedError";
    pub const CONFLICT: &str = "ConflictError";
    pub const RATE_LIMIT: &str = "RateLimitError";
    pub const SYNTAX: &str = "SyntaxError";
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "UnsupportedMediaTypeError";
    pub const PAYLOAD_TOO_LARGE: &str = "PayloadTooLargeError";
    pub const BAD_REQUEST: &str = "BadRequestError";
    pub const CAST: &str = "CastError";
    pub const DATABASE: &str = "DatabaseError";
    pub const GENERIC: &str = "Error";
}

/// Statuses for errors that carry no explicit status, looked up by category.
/// First match wins; anything unmatched is a 500.
const CATEGORY_RULES: &[(&str, StatusCode)] = &[
    (kind::VALIDATION, StatusCode::BAD_REQUEST),
    (kind::JSON_WEB_TOKEN, StatusCode::UNAUTHORIZED),
];

const FALLBACK_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// API error: a category, a message and an optional explicit status
///
/// # Example
/// ```
/// use around_api::api::errors::ApiError;
/// use axum::http::StatusCode;
///
/// assert_eq!(ApiError::validation("email is required").status(), StatusCode::BAD_REQUEST);
/// assert_eq!(ApiError::new("TypeError", "x is undefined").status(), StatusCode::INTERNAL_SERVER_ERROR);
/// assert_eq!(
///     ApiError::new("NotFoundError", "card not found")
///         .with_status(StatusCode::NOT_FOUND)
///         .status(),
///     StatusCode::NOT_FOUND,
/// );
/// ```
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: Cow<'static, str>,
    pub message: String,
    pub explicit_status: Option<StatusCode>,
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Copy of a translated error left in the response extensions for the error logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub kind: String,
    pub message: String,
}

impl ApiError {
    /// Creates an error with no explicit status; its category decides the status
    pub fn new(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            explicit_status: None,
        }
    }

    /// Pins the response status, overriding category-based resolution
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.explicit_status = Some(status);
        self
    }

    /// Request input broke a field rule (400 via category)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(kind::VALIDATION, message)
    }

    /// Bearer token could not be verified (401 via category)
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(kind::JSON_WEB_TOKEN, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(kind::UNAUTHORIZED, message).with_status(StatusCode::UNAUTHORIZED)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(kind::FORBIDDEN, message).with_status(StatusCode::FORBIDDEN)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(kind::NOT_FOUND, message).with_status(StatusCode::NOT_FOUND)
    }

    /// Creates a 405 Method Not Allowed error
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(kind::METHOD_NOT_ALLOWED, message).with_status(StatusCode::METHOD_NOT_ALLOWED)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(kind::CONFLICT, message).with_status(StatusCode::CONFLICT)
    }

    /// Creates a 429 Too Many Requests error
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(kind::RATE_LIMIT, message).with_status(StatusCode::TOO_MANY_REQUESTS)
    }

    /// Unclassified server fault (500 via fallback)
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(kind::GENERIC, message)
    }

    /// Resolves the response status
    ///
    /// Explicit status first, then the category rules, then 500.
    pub fn status(&self) -> StatusCode {
        self.explicit_status
            .or_else(|| {
                CATEGORY_RULES
                    .iter()
                    .find(|(category, _)| *category == self.kind)
                    .map(|(_, status)| *status)
            })
            .unwrap_or(FALLBACK_STATUS)
    }

    /// Client-facing text: `caught <category> error: <message>`
    pub fn client_message(&self) -> String {
        format!("caught {} error: {}", self.kind, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            message: self.client_message(),
        });

        let mut response = (status, body).into_response();
        response.extensions_mut().insert(ErrorRecord {
            kind: self.kind.into_owned(),
            message: self.message,
        });
        response
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            RepositoryError::Duplicate(_) => Self::conflict(err.to_string()),
            RepositoryError::Database(message) => Self::new(kind::DATABASE, message),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::new(kind::TOKEN_EXPIRED, err.to_string())
                .with_status(StatusCode::UNAUTHORIZED),
            TokenError::Invalid(message) => Self::invalid_token(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let message = rejection.body_text();

        match rejection {
            // well-formed JSON of the wrong shape is a field-rule violation
            JsonRejection::JsonDataError(_) => Self::validation(message),
            JsonRejection::JsonSyntaxError(_) => Self::new(kind::SYNTAX, message).with_status(status),
            JsonRejection::MissingJsonContentType(_) => {
                Self::new(kind::UNSUPPORTED_MEDIA_TYPE, message).with_status(status)
            }
            _ if status == StatusCode::PAYLOAD_TOO_LARGE => {
                Self::new(kind::PAYLOAD_TOO_LARGE, message).with_status(status)
            }
            _ => Self::new(kind::BAD_REQUEST, message).with_status(status),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let status = rejection.status();
        let message = rejection.body_text();

        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                Self::new(kind::CAST, message).with_status(StatusCode::BAD_REQUEST)
            }
            _ => Self::new(kind::GENERIC, message).with_status(status),
        }
    }
}
