//! In-memory post repository - used when no database is configured, and as
//! the substitute store in handler tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, PageRequest, Post, PostPage, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// Posts kept in a BTreeMap behind an async RwLock, ids handed out from an
/// atomic counter. Mirrors the database repository's observable behavior,
/// including newest-first ordering.
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, request: PageRequest) -> Result<PostPage, RepoError> {
        let posts = self.posts.read().await;
        let total_items = posts.len() as u64;

        let mut ordered: Vec<Post> = posts.values().cloned().collect();
        // Ties on created_at fall back to id so paging stays deterministic.
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let page: Vec<Post> = ordered
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit as usize)
            .collect();

        Ok(PostPage::new(page, request, total_items))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: input.title,
            body: input.body,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.get_mut(&id) else {
            return Ok(None);
        };

        post.title = patch.title;
        post.body = patch.body;
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repo: &InMemoryPostRepository, n: usize) -> Vec<Post> {
        let mut created = Vec::new();
        for i in 0..n {
            created.push(
                repo.create(NewPost {
                    title: format!("Post {i}"),
                    body: format!("Body {i}"),
                })
                .await
                .unwrap(),
            );
        }
        created
    }

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .create(NewPost {
                title: "T".into(),
                body: "B".into(),
            })
            .await
            .unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.created_at, post.updated_at);

        let fetched = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(fetched, post);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at_only() {
        let repo = InMemoryPostRepository::new();
        let post = seed(&repo, 1).await.remove(0);

        let updated = repo
            .update(
                post.id,
                PostPatch {
                    title: "New title".into(),
                    body: "New body".into(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update(
                42,
                PostPatch {
                    title: "T".into(),
                    body: "B".into(),
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_is_hard_and_reports_misses() {
        let repo = InMemoryPostRepository::new();
        let post = seed(&repo, 1).await.remove(0);

        assert!(repo.delete(post.id).await.unwrap());
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
        assert!(!repo.delete(post.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_orders_newest_first_and_pages() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, 15).await;

        let page = repo
            .list(PageRequest { page: 2, limit: 10 })
            .await
            .unwrap();

        assert_eq!(page.posts.len(), 5);
        assert_eq!(page.total_items, 15);
        assert_eq!(page.total_pages, 2);
        // Newest first: page 2 holds the five oldest posts.
        assert_eq!(page.posts.last().unwrap().title, "Post 0");

        let first = repo
            .list(PageRequest { page: 1, limit: 10 })
            .await
            .unwrap();
        assert_eq!(first.posts.first().unwrap().title, "Post 14");
    }

    #[tokio::test]
    async fn list_past_the_end_is_empty_with_descriptor() {
        let repo = InMemoryPostRepository::new();
        seed(&repo, 3).await;

        let page = repo
            .list(PageRequest { page: 5, limit: 10 })
            .await
            .unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 1);
    }
}
