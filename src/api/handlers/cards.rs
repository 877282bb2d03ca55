use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::middleware::auth::AuthUser;
use crate::domain::card::Card;
use crate::domain::repositories::RepositoryError;
use crate::domain::value_objects::{ShortText, WebUrl};
use crate::state::AppState;

/// Request body for creating a card
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCardRequest {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct CardResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            name: card.name().to_string(),
            link: card.link().to_string(),
            owner: card.owner(),
            likes: card.likes().to_vec(),
            created_at: card.created_at(),
        }
    }
}

fn card_not_found() -> ApiError {
    ApiError::not_found("Card not found")
}

/// List all cards, newest first
///
/// GET /cards
pub async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<CardResponse>>, ApiError> {
    let cards = state.cards.list().await?;
    Ok(Json(cards.iter().map(CardResponse::from).collect()))
}

/// Create a card owned by the caller
///
/// POST /cards
pub async fn create_card(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(req): JsonBody<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardResponse>), ApiError> {
    let name = ShortText::new("name", req.name).map_err(ApiError::validation)?;
    let link = WebUrl::new("link", req.link).map_err(ApiError::validation)?;

    let card = state.cards.create(Card::new(name, link, user_id)).await?;

    Ok((StatusCode::CREATED, Json(CardResponse::from(&card))))
}

/// Delete one of the caller's cards
///
/// DELETE /cards/:card_id
pub async fn delete_card(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(card_id): PathParam<Uuid>,
) -> Result<Json<CardResponse>, ApiError> {
    let card = state
        .cards
        .find_by_id(card_id)
        .await?
        .ok_or_else(card_not_found)?;

    if !card.is_owned_by(user_id) {
        return Err(ApiError::forbidden("You can only delete your own cards"));
    }

    state.cards.delete(card_id).await.map_err(|e| match e {
        // lost a race with another delete
        RepositoryError::NotFound(_) => card_not_found(),
        other => ApiError::from(other),
    })?;

    Ok(Json(CardResponse::from(&card)))
}

/// Like a card (no-op if already liked)
///
/// PUT /cards/:card_id/likes
pub async fn like_card(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(card_id): PathParam<Uuid>,
) -> Result<Json<CardResponse>, ApiError> {
    let card = state
        .cards
        .add_like(card_id, user_id)
        .await?
        .ok_or_else(card_not_found)?;

    Ok(Json(CardResponse::from(&card)))
}

/// Remove the caller's like (no-op if not liked)
///
/// DELETE /cards/:card_id/likes
pub async fn unlike_card(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(card_id): PathParam<Uuid>,
) -> Result<Json<CardResponse>, ApiError> {
    let card = state
        .cards
        .remove_like(card_id, user_id)
        .await?
        .ok_or_else(card_not_found)?;

    Ok(Json(CardResponse::from(&card)))
}
