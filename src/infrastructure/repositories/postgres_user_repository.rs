use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, RepositoryResult, UserRepository};
use crate::domain::user::value_objects::Email;
use crate::domain::user::User;

/// Row shape shared by every user query
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    about: String,
    avatar: String,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::new(&row.email)
            .map_err(|e| RepositoryError::Database(format!("Invalid email from database: {}", e)))?;

        Ok(User {
            id: row.id,
            name: row.name,
            about: row.about,
            avatar: row.avatar,
            email,
            password_hash: row.password_hash,
        })
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<User> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, about, avatar, email, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.about)
        .bind(&user.avatar)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| match RepositoryError::from(e) {
            RepositoryError::Duplicate(_) => RepositoryError::Duplicate("User".to_string()),
            other => other,
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, about, avatar, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, about, avatar, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, about, avatar, email, password_hash
            FROM users
            ORDER BY name, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        about: &str,
    ) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2, about = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, about, avatar, email, password_hash
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(about)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn update_avatar(&self, id: Uuid, avatar: &str) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET avatar = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, about, avatar, email, password_hash
            "#,
        )
        .bind(id)
        .bind(avatar)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
