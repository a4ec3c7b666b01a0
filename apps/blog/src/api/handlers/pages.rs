use axum::response::{Html, Redirect};

use crate::api::errors::ApiError;
use crate::api::templates::{render, AboutMeTemplate, HomeTemplate};

/// Landing page
///
/// GET /
pub async fn home() -> Result<Html<String>, ApiError> {
    render(&HomeTemplate)
}

/// GET /about_me/
pub async fn about_me() -> Result<Html<String>, ApiError> {
    render(&AboutMeTemplate)
}

/// GET /about_me
pub async fn about_me_redirect() -> Redirect {
    Redirect::permanent("/about_me/")
}

/// Fallback for unrouted paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("The page you requested does not exist")
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
