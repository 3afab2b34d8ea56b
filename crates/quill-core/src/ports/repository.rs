use async_trait::async_trait;

use crate::domain::{NewPost, PageRequest, Post, PostPage, PostPatch};
use crate::error::RepoError;

/// Post repository - the single store-facing contract of the system.
///
/// Handlers receive this as an injected `Arc<dyn PostRepository>` so tests
/// can substitute an in-memory fake for the database-backed implementation.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One page of posts ordered by `created_at` descending, newest first,
    /// plus the derived pagination descriptor.
    ///
    /// The row count and the page fetch are two separate statements; a
    /// concurrent write between them may leave `total_items` slightly stale
    /// relative to the returned rows.
    async fn list(&self, request: PageRequest) -> Result<PostPage, RepoError>;

    /// Find a post by its id. `None` if no row matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Insert a new post. The store assigns id and both timestamps.
    async fn create(&self, input: NewPost) -> Result<Post, RepoError>;

    /// Replace title/body of an existing post and refresh `updated_at`.
    /// `None` if no row matches. `created_at` is never touched.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Hard-delete a post. `false` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
