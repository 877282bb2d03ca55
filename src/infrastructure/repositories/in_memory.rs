//! In-memory repository implementations.
//!
//! Used by the test suite and by `STORAGE_BACKEND=memory` runs. Data lives
//! for the lifetime of the process.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::card::Card;
use crate::domain::repositories::{
    CardRepository, RepositoryError, RepositoryResult, UserRepository,
};
use crate::domain::user::value_objects::Email;
use crate::domain::user::User;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Duplicate("User".to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let mut users = self.users.read().await.clone();
        // stable sort keeps creation order among equal names
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> RepositoryResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.name = name.to_string();
            user.about = about.to_string();
            user.clone()
        }))
    }

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> RepositoryResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.avatar = avatar.to_string();
            user.clone()
        }))
    }
}

/// In-memory implementation of CardRepository
///
/// Cards are kept in insertion order, so listing newest first is a reverse walk.
#[derive(Debug, Default)]
pub struct InMemoryCardRepository {
    cards: RwLock<Vec<Card>>,
}

impl InMemoryCardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> RepositoryResult<Option<Card>>
    where
        F: FnOnce(&mut Card) + Send,
    {
        let mut cards = self.cards.write().await;
        Ok(cards.iter_mut().find(|c| c.id() == id).map(|card| {
            apply(card);
            card.clone()
        }))
    }
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn create(&self, card: Card) -> RepositoryResult<Card> {
        let mut cards = self.cards.write().await;
        if cards.iter().any(|c| c.id() == card.id()) {
            return Err(RepositoryError::Duplicate("Card".to_string()));
        }
        cards.push(card.clone());
        Ok(card)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Card>> {
        let cards = self.cards.read().await;
        Ok(cards.iter().find(|c| c.id() == id).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Card>> {
        let cards = self.cards.read().await;
        Ok(cards.iter().rev().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut cards = self.cards.write().await;
        let before = cards.len();
        cards.retain(|c| c.id() != id);

        if cards.len() == before {
            return Err(RepositoryError::NotFound("Card".to_string()));
        }
        Ok(())
    }

    async fn add_like(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Card>> {
        self.update(id, |card| {
            card.like(user_id);
        })
        .await
    }

    async fn remove_like(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Card>> {
        self.update(id, |card| {
            card.unlike(user_id);
        })
        .await
    }
}
