pub mod value_objects;

use chrono::{DateTime, Utc};

pub use value_objects::Username;

/// A registered account that can author posts
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Username,
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}
