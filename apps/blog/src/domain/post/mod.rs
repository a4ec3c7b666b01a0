// Post aggregate module

mod post;

pub use post::{Author, NewPost, Post};
