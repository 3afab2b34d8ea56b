//! Domain entities - the core business objects.

mod post;

pub use post::{NewPost, PageRequest, Post, PostPage, PostPatch};
