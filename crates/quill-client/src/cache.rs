//! Response cache with an explicit invalidation contract.
//!
//! Keys: the collection lives under `posts:list:{page}:{limit}`, single
//! posts under `posts:{id}`. The `Cache` port has no scan operation, so
//! cached list keys are tracked here and dropped as a set when the
//! collection is invalidated.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use quill_core::ports::Cache;
use quill_shared::dto::{PostListResponse, PostResponse};

pub(crate) fn list_key(page: u64, limit: u64) -> String {
    format!("posts:list:{page}:{limit}")
}

pub(crate) fn post_key(id: i64) -> String {
    format!("posts:{id}")
}

/// Cached post responses keyed by page and id.
///
/// A stale or unparsable entry behaves like a miss; cache write failures
/// are logged and swallowed, the source of truth is always the API.
pub struct PostCache {
    cache: Arc<dyn Cache>,
    list_keys: Mutex<HashSet<String>>,
    ttl: Option<Duration>,
}

impl PostCache {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self {
            cache,
            list_keys: Mutex::new(HashSet::new()),
            ttl: None,
        }
    }

    pub fn with_ttl(cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::new(cache)
        }
    }

    pub async fn get_list(&self, page: u64, limit: u64) -> Option<PostListResponse> {
        let raw = self.cache.get(&list_key(page, limit)).await?;
        serde_json::from_str(&raw).ok()
    }

    pub async fn put_list(&self, page: u64, limit: u64, value: &PostListResponse) {
        let key = list_key(page, limit);
        self.store(&key, value).await;
        self.list_keys.lock().await.insert(key);
    }

    pub async fn get_post(&self, id: i64) -> Option<PostResponse> {
        let raw = self.cache.get(&post_key(id)).await?;
        serde_json::from_str(&raw).ok()
    }

    pub async fn put_post(&self, id: i64, value: &PostResponse) {
        self.store(&post_key(id), value).await;
    }

    /// Drop every cached page of the collection. Runs after a create,
    /// which can shift any page.
    pub async fn invalidate_collection(&self) {
        let keys: Vec<String> = self.list_keys.lock().await.drain().collect();
        for key in keys {
            if let Err(e) = self.cache.delete(&key).await {
                tracing::debug!("Cache delete failed for {key}: {e}");
            }
        }
    }

    /// Drop the collection and the single-post entry for `id`. Runs after
    /// an update or delete of that post.
    pub async fn invalidate_post(&self, id: i64) {
        self.invalidate_collection().await;
        if let Err(e) = self.cache.delete(&post_key(id)).await {
            tracing::debug!("Cache delete failed for post {id}: {e}");
        }
    }

    async fn store<T: serde::Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Cache serialization failed for {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &raw, self.ttl).await {
            tracing::debug!("Cache write failed for {key}: {e}");
        }
    }
}
