use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::middleware::auth::AuthUser;
use crate::domain::user::User;
use crate::domain::value_objects::{ShortText, WebUrl};
use crate::state::AppState;

/// Public view of a user; the password hash is never serialized
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            about: user.about.clone(),
            avatar: user.avatar.clone(),
            email: user.email.to_string(),
        }
    }
}

/// Request body for profile updates
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub about: String,
}

/// Request body for avatar updates
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

fn user_not_found() -> ApiError {
    ApiError::not_found("User not found")
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// The authenticated user
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

/// Get a user by ID
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

/// Update the authenticated user's name and "about" line
///
/// PATCH /users/me
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let name = ShortText::new("name", req.name).map_err(ApiError::validation)?;
    let about = ShortText::new("about", req.about).map_err(ApiError::validation)?;

    let user = state
        .users
        .update_profile(user_id, name.as_str(), about.as_str())
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

/// Update the authenticated user's avatar
///
/// PATCH /users/me/avatar
pub async fn update_avatar(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(req): JsonBody<UpdateAvatarRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let avatar = WebUrl::new("avatar", req.avatar).map_err(ApiError::validation)?;

    let user = state
        .users
        .update_avatar(user_id, avatar.as_str())
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}
