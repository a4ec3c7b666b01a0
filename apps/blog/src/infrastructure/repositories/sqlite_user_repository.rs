use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::auth::password::{hash_password, DEFAULT_COST};
use crate::domain::repositories::{RepositoryError, RepositoryResult, UserRepository};
use crate::domain::user::{User, Username};

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
    hash_cost: u32,
}

impl SqliteUserRepository {
    /// Creates a new SqliteUserRepository hashing at bcrypt's default cost
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_hash_cost(pool, DEFAULT_COST)
    }

    /// Creates a repository with an explicit bcrypt work factor
    pub fn with_hash_cost(pool: SqlitePool, hash_cost: u32) -> Self {
        Self { pool, hash_cost }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    date_joined: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            username: Username::new(row.username).map_err(RepositoryError::InvalidRecord)?,
            password_hash: row.password_hash,
            date_joined: row.date_joined,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, username: Username, password: &str) -> RepositoryResult<User> {
        let password_hash = hash_password(password, self.hash_cost)?;
        let date_joined = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, date_joined)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(username.as_str())
        .bind(&password_hash)
        .bind(date_joined)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepositoryError::DuplicateUsername(username.to_string())
            }
            other => RepositoryError::Database(other),
        })?;

        let id = result.last_insert_rowid();
        tracing::debug!(user_id = id, username = %username, "user created");

        Ok(User {
            id,
            username,
            password_hash,
            date_joined,
        })
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, date_joined
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, date_joined
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
