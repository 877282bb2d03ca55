use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::card::Card;
use crate::domain::repositories::{CardRepository, RepositoryError, RepositoryResult};

#[derive(sqlx::FromRow)]
struct CardRow {
    id: Uuid,
    name: String,
    link: String,
    owner_id: Uuid,
    likes: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Card::from_persistence(
            row.id,
            row.name,
            row.link,
            row.owner_id,
            row.likes,
            row.created_at,
        )
    }
}

/// PostgreSQL implementation of CardRepository
///
/// Likes are kept in a `UUID[]` column so a card is read back in one row.
pub struct PostgresCardRepository {
    pool: PgPool,
}

impl PostgresCardRepository {
    /// Creates a new PostgresCardRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PostgresCardRepository {
    async fn create(&self, card: Card) -> RepositoryResult<Card> {
        sqlx::query(
            r#"
            INSERT INTO cards (id, name, link, owner_id, likes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(card.id())
        .bind(card.name())
        .bind(card.link())
        .bind(card.owner())
        .bind(card.likes().to_vec())
        .bind(card.created_at())
        .execute(&self.pool)
        .await?;

        Ok(card)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Card>> {
        let row = sqlx::query_as::<_, CardRow>(
            r#"
            SELECT id, name, link, owner_id, likes, created_at
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Card::from))
    }

    async fn list(&self) -> RepositoryResult<Vec<Card>> {
        let rows = sqlx::query_as::<_, CardRow>(
            r#"
            SELECT id, name, link, owner_id, likes, created_at
            FROM cards
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Card::from).collect())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Card".to_string()));
        }

        Ok(())
    }

    async fn add_like(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Card>> {
        let row = sqlx::query_as::<_, CardRow>(
            r#"
            UPDATE cards
            SET likes = CASE
                WHEN $2 = ANY(likes) THEN likes
                ELSE array_append(likes, $2)
            END
            WHERE id = $1
            RETURNING id, name, link, owner_id, likes, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Card::from))
    }

    async fn remove_like(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Card>> {
        let row = sqlx::query_as::<_, CardRow>(
            r#"
            UPDATE cards
            SET likes = array_remove(likes, $2)
            WHERE id = $1
            RETURNING id, name, link, owner_id, likes, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Card::from))
    }
}
