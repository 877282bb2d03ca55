use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::auth::jwt::verify_token;
use crate::state::AppState;

/// Authentication gate for every non-public route
///
/// Verifies the `Authorization: Bearer <token>` header and stores the
/// caller's id in the request extensions, where [`AuthUser`] picks it up.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let claims = verify_token(token, &state.auth.jwt_secret)?;

    request.extensions_mut().insert(AuthUser(claims.sub));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Authorization required"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>"))
}

/// Id of the authenticated caller
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(AuthUser(user_id): AuthUser) -> String {
///     format!("Hello user {}", user_id)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // only present behind `require_auth`
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| ApiError::unauthorized("Authorization required"))
    }
}
