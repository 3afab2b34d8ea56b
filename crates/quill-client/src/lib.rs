//! # Quill Client
//!
//! The data-access layer views talk to: a typed HTTP client for the posts
//! API plus a caching wrapper that keeps list/detail responses warm and
//! invalidates the affected entries after every successful write.

pub mod cache;
pub mod posts;

pub use cache::PostCache;
pub use posts::{CachedPosts, ClientError, PostsClient};
