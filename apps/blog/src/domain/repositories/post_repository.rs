use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::post::{NewPost, Post};

/// Repository trait for Post aggregate
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return it with its assigned id and timestamp
    async fn create(&self, post: NewPost) -> RepositoryResult<Post>;

    /// Find a post by its primary key
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Post>>;

    /// All posts, newest first
    async fn list(&self) -> RepositoryResult<Vec<Post>>;

    /// Number of stored posts
    async fn count(&self) -> RepositoryResult<i64>;
}
