// Repository contracts (ports)
// Implementations live in the infrastructure layer

pub mod card_repository;
pub mod user_repository;

pub use card_repository::CardRepository;
pub use user_repository::UserRepository;

use thiserror::Error;

/// Errors returned by repository implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound("Record".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::Duplicate("Record".to_string())
            }
            _ => RepositoryError::Database(err.to_string()),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
