//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::{Post, PostPage};

/// Request body for creating or replacing a post.
///
/// PUT reuses the same shape: an update is a wholesale replace of both
/// fields, never a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

/// A post as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Derived pagination descriptor returned alongside every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Listing payload: one page of posts plus the descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: Pagination,
}

impl From<PostPage> for PostListResponse {
    fn from(page: PostPage) -> Self {
        Self {
            pagination: Pagination {
                page: page.page,
                limit: page.limit,
                total_items: page.total_items,
                total_pages: page.total_pages,
            },
            posts: page.posts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response body of a successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostResponse {
    pub message: String,
    pub id: i64,
    pub title: String,
    pub body: String,
}
