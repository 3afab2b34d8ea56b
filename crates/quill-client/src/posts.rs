//! Typed client for the posts API, and its cached wrapper.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use quill_core::ports::Cache;
use quill_shared::ErrorBody;
use quill_shared::dto::{PostInput, PostListResponse, PostResponse, UpdatePostResponse};

use crate::cache::PostCache;

/// Client-side failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connection refused, timeout, bad body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` carries the
    /// `{error}` body when the server sent one.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Thin typed wrapper over the HTTP contract. One method per endpoint,
/// no retries, no caching.
pub struct PostsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    /// `base_url` points at the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self, page: u64, limit: u64) -> Result<PostListResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/posts", self.base_url))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn get(&self, id: i64) -> Result<PostResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/posts/{id}", self.base_url))
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn create(&self, title: &str, body: &str) -> Result<PostResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/posts", self.base_url))
            .json(&PostInput {
                title: title.to_string(),
                body: body.to_string(),
            })
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<UpdatePostResponse, ClientError> {
        let response = self
            .http
            .put(format!("{}/posts/{id}", self.base_url))
            .json(&PostInput {
                title: title.to_string(),
                body: body.to_string(),
            })
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/posts/{id}", self.base_url))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(api_error(response).await)
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => "Request failed".to_string(),
    };

    ClientError::Api { status, message }
}

/// The hook layer: reads consult the cache first and populate it on miss;
/// every successful write invalidates the entries it could have changed.
pub struct CachedPosts {
    client: PostsClient,
    cache: PostCache,
}

impl CachedPosts {
    pub fn new(client: PostsClient, cache: Arc<dyn Cache>) -> Self {
        Self {
            client,
            cache: PostCache::new(cache),
        }
    }

    pub async fn list(&self, page: u64, limit: u64) -> Result<PostListResponse, ClientError> {
        if let Some(cached) = self.cache.get_list(page, limit).await {
            return Ok(cached);
        }

        let fresh = self.client.list(page, limit).await?;
        self.cache.put_list(page, limit, &fresh).await;
        Ok(fresh)
    }

    pub async fn get(&self, id: i64) -> Result<PostResponse, ClientError> {
        if let Some(cached) = self.cache.get_post(id).await {
            return Ok(cached);
        }

        let fresh = self.client.get(id).await?;
        self.cache.put_post(id, &fresh).await;
        Ok(fresh)
    }

    /// A new post can land on any page, so the whole collection goes.
    pub async fn create(&self, title: &str, body: &str) -> Result<PostResponse, ClientError> {
        let created = self.client.create(title, body).await?;
        self.cache.invalidate_collection().await;
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<UpdatePostResponse, ClientError> {
        let updated = self.client.update(id, title, body).await?;
        self.cache.invalidate_post(id).await;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client.delete(id).await?;
        self.cache.invalidate_post(id).await;
        Ok(())
    }
}
