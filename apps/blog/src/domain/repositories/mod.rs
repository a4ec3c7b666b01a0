// Repository contracts implemented by the infrastructure layer

pub mod post_repository;
pub mod user_repository;

use thiserror::Error;

use crate::auth::password::PasswordError;

pub use post_repository::PostRepository;
pub use user_repository::UserRepository;

/// Errors raised while reading or writing the store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
