//! Blog server library
//!
//! Domain types, SQLite repositories and the axum router serving the post
//! list and post detail pages.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
