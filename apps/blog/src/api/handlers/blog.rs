use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::api::templates::{render, PostDetailTemplate, PostListTemplate};
use crate::domain::repositories::PostRepository;
use crate::infrastructure::repositories::SqlitePostRepository;

/// List every post, newest first
///
/// GET /blog/
#[tracing::instrument(skip(pool))]
pub async fn post_list(State(pool): State<SqlitePool>) -> Result<Html<String>, ApiError> {
    let post_repo = SqlitePostRepository::new(pool);
    let posts = post_repo.list().await?;

    tracing::debug!(count = posts.len(), "rendering post list");
    render(&PostListTemplate { posts })
}

/// Show a single post
///
/// GET /blog/:id/
#[tracing::instrument(skip(pool))]
pub async fn post_detail(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let post_repo = SqlitePostRepository::new(pool);
    let post = post_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No post with id {}", id)))?;

    render(&PostDetailTemplate { post })
}

/// GET /blog
pub async fn post_list_redirect() -> Redirect {
    Redirect::permanent("/blog/")
}

/// GET /blog/:id
pub async fn post_detail_redirect(Path(id): Path<i64>) -> Redirect {
    Redirect::permanent(&format!("/blog/{}/", id))
}
