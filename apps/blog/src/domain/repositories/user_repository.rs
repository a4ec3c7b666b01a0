use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::user::{User, Username};

/// Repository trait for User accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user, hashing the plaintext password before it is stored
    async fn create_user(&self, username: Username, password: &str) -> RepositoryResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
}
