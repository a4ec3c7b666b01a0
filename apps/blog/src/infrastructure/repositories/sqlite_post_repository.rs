use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::post::{Author, NewPost, Post};
use crate::domain::repositories::{PostRepository, RepositoryError, RepositoryResult};
use crate::domain::user::Username;

/// SQLite implementation of PostRepository
///
/// Every read joins the author so a `Post` always carries its owner.
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    /// Creates a new SqlitePostRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    author_id: i64,
    author_username: String,
}

impl TryFrom<PostRow> for Post {
    type Error = RepositoryError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.author_username).map_err(RepositoryError::InvalidRecord)?;

        Ok(Post::from_persistence(
            row.id,
            row.title,
            row.content,
            Author {
                id: row.author_id,
                username,
            },
            row.created_at,
        ))
    }
}

const SELECT_POSTS: &str = r#"
    SELECT
        p.id, p.title, p.content, p.created_at,
        u.id AS author_id,
        u.username AS author_username
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create(&self, post: NewPost) -> RepositoryResult<Post> {
        let result = sqlx::query(
            r#"
            INSERT INTO posts (title, content, author_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(post_id = id, author_id = post.author_id, "post created");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::InvalidRecord(format!("post {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POSTS} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self) -> RepositoryResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POSTS} ORDER BY p.id DESC"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
