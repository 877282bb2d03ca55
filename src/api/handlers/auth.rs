use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::handlers::users::UserResponse;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::domain::repositories::RepositoryError;
use crate::domain::user::value_objects::{Email, Password};
use crate::domain::user::{Profile, User};
use crate::domain::value_objects::{ShortText, WebUrl};
use crate::state::AppState;

/// Request body for sign-up
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub about: Option<String>,
    pub avatar: Option<String>,
}

/// Request body for sign-in
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful sign-in
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
}

/// Register a new user
///
/// POST /signup
pub async fn sign_up(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignUpRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let email = Email::new(&req.email).map_err(ApiError::validation)?;
    let password = Password::for_sign_up(req.password).map_err(ApiError::validation)?;
    let profile = Profile {
        name: req
            .name
            .map(|name| ShortText::new("name", name))
            .transpose()
            .map_err(ApiError::validation)?,
        about: req
            .about
            .map(|about| ShortText::new("about", about))
            .transpose()
            .map_err(ApiError::validation)?,
        avatar: req
            .avatar
            .map(|avatar| WebUrl::new("avatar", avatar))
            .transpose()
            .map_err(ApiError::validation)?,
    };

    let password_hash = hash_password(password.expose(), state.auth.bcrypt_cost)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = state
        .users
        .create(User::register(email, password_hash, profile))
        .await
        .map_err(|e| match e {
            RepositoryError::Duplicate(_) => {
                ApiError::conflict("User with this email already exists")
            }
            other => ApiError::from(other),
        })?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// Exchange email and password for a token
///
/// POST /signin
pub async fn sign_in(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignInRequest>,
) -> Result<Json<SignInResponse>, ApiError> {
    let email = Email::new(&req.email).map_err(ApiError::validation)?;
    let password = Password::for_sign_in(req.password).map_err(ApiError::validation)?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Incorrect email or password"))?;

    let valid = verify_password(password.expose(), &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Incorrect email or password"));
    }

    let token = create_token(user.id, &state.auth.jwt_secret, state.auth.token_ttl)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(SignInResponse { token }))
}
