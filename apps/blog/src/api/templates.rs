// askama page templates, compiled from `templates/`

use askama::Template;
use axum::response::Html;

use crate::api::errors::ApiError;
use crate::domain::post::Post;

/// `GET /blog/`
#[derive(Template)]
#[template(path = "blog/post_list.html")]
pub struct PostListTemplate {
    pub posts: Vec<Post>,
}

/// `GET /blog/:id/`
#[derive(Template)]
#[template(path = "blog/post_detail.html")]
pub struct PostDetailTemplate {
    pub post: Post,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "pages/about_me.html")]
pub struct AboutMeTemplate;

/// Error page shown inside the regular site layout
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub reason: &'a str,
    pub message: &'a str,
}

/// Renders a template into an HTML response body
pub fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "template rendering failed");
        ApiError::internal_server_error("Failed to render page")
    })
}
