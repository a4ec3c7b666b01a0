// Domain layer module exports
// Domain types know nothing about SQLite, HTTP or templates

pub mod post;
pub mod repositories;
pub mod user;
