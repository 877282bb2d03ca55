use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::card::Card;

/// Repository trait for Card aggregate
///
/// Like operations have set semantics: liking twice or unliking a card that
/// was never liked leaves the card unchanged. They return `None` when the
/// card does not exist.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Insert a new card
    async fn create(&self, card: Card) -> RepositoryResult<Card>;

    /// Find a card by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Card>>;

    /// List all cards, newest first
    async fn list(&self) -> RepositoryResult<Vec<Card>>;

    /// Delete a card by ID
    ///
    /// Fails with `RepositoryError::NotFound` when no card was deleted.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// Add `user_id` to the card's likes
    async fn add_like(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Card>>;

    /// Remove `user_id` from the card's likes
    async fn remove_like(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Card>>;
}
