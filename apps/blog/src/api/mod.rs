// API layer module (HTTP adapters over the domain)

pub mod errors;
pub mod handlers;
pub mod templates;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use handlers::{blog, pages};

/// Builds the application router with the pool as shared state
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about_me", get(pages::about_me_redirect))
        .route("/about_me/", get(pages::about_me))
        .route("/health", get(pages::health_check))
        // Blog routes
        .route("/blog", get(blog::post_list_redirect))
        .route("/blog/", get(blog::post_list))
        .route("/blog/:id", get(blog::post_detail_redirect))
        .route("/blog/:id/", get(blog::post_detail))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
