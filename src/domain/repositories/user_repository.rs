use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::user::value_objects::Email;
use crate::domain::user::User;

/// Repository trait for User aggregate
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// Fails with `RepositoryError::Duplicate` when the email is taken.
    async fn create(&self, user: User) -> RepositoryResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>>;

    /// List all users, ordered by name
    async fn list(&self) -> RepositoryResult<Vec<User>>;

    /// Replace the user's name and "about" line
    async fn update_profile(&self, id: Uuid, name: &str, about: &str)
        -> RepositoryResult<Option<User>>;

    /// Replace the user's avatar link
    async fn update_avatar(&self, id: Uuid, avatar: &str) -> RepositoryResult<Option<User>>;
}
