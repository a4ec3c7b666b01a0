use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::user::Username;

/// The user a post belongs to, as seen from the post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub username: Username,
}

/// Post aggregate root
///
/// A blog entry written by exactly one author. Posts are created once and
/// never modified afterwards.
///
/// # Example
/// ```
/// use blog::domain::post::{Author, Post};
/// use blog::domain::user::Username;
/// use chrono::Utc;
///
/// let post = Post::from_persistence(
///     1,
///     "First post".to_string(),
///     "Hello World.".to_string(),
///     Author { id: 7, username: Username::new("trump").unwrap() },
///     Utc::now(),
/// );
///
/// assert_eq!(post.absolute_url(), "/blog/1/");
/// assert_eq!(post.to_string(), "[1] First post");
/// ```
#[derive(Debug, Clone)]
pub struct Post {
    id: i64,
    title: String,
    content: String,
    author: Author,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Reconstitutes a Post from stored values
    pub fn from_persistence(
        id: i64,
        title: String,
        content: String,
        author: Author,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Canonical URL of the post's detail page
    pub fn absolute_url(&self) -> String {
        format!("/blog/{}/", self.id)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.title)
    }
}

/// Values needed to insert a post
///
/// The author is referenced by id; the store assigns the primary key and
/// creation timestamp.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(id: i64) -> Post {
        Post::from_persistence(
            id,
            "첫번째 포스트입니다.".to_string(),
            "Hello World. We are the world.".to_string(),
            Author {
                id: 1,
                username: Username::new("trump").unwrap(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn absolute_url_uses_primary_key() {
        assert_eq!(sample_post(1).absolute_url(), "/blog/1/");
        assert_eq!(sample_post(42).absolute_url(), "/blog/42/");
    }

    #[test]
    fn display_shows_id_and_title() {
        assert_eq!(sample_post(3).to_string(), "[3] 첫번째 포스트입니다.");
    }

    #[test]
    fn accessors_return_stored_values() {
        let post = sample_post(1);
        assert_eq!(post.id(), 1);
        assert_eq!(post.content(), "Hello World. We are the world.");
        assert_eq!(post.author().username.as_str(), "trump");
    }

    #[test]
    fn new_post_keeps_author_reference() {
        let new_post = NewPost::new("title", "content", 9);
        assert_eq!(new_post.author_id, 9);
        assert_eq!(new_post.title, "title");
    }
}
