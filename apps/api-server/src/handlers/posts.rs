//! Post CRUD handlers - one handler per route, one store operation each.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::{NewPost, PageRequest, PostPatch};
use quill_shared::dto::{PostInput, PostListResponse, PostResponse, UpdatePostResponse};

use crate::middleware::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Raw query parameters. Kept as strings so `?page=abc` falls back to the
/// default instead of failing extraction with a 400.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    limit: Option<String>,
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListParams>,
) -> ApiResult<HttpResponse> {
    let request = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());
    let page = state.posts.list(request).await?;

    Ok(HttpResponse::Ok().json(PostListResponse::from(page)))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostResponse::from(post))),
        None => Err(ApiError::NotFound("Post not found".to_string())),
    }
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostInput>,
) -> ApiResult<HttpResponse> {
    let input = body.into_inner();
    require_title_and_body(&input)?;

    let post = state
        .posts
        .create(NewPost {
            title: input.title,
            body: input.body,
        })
        .await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostInput>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner();
    require_title_and_body(&input)?;

    let updated = state
        .posts
        .update(
            id,
            PostPatch {
                title: input.title,
                body: input.body,
            },
        )
        .await?;

    match updated {
        Some(post) => Ok(HttpResponse::Ok().json(UpdatePostResponse {
            message: "Post updated".to_string(),
            id: post.id,
            title: post.title,
            body: post.body,
        })),
        None => Err(ApiError::NotFound("Post not found".to_string())),
    }
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound("Post not found".to_string()))
    }
}

/// Presence check only, and it runs before any store access. Whitespace
/// counts as empty.
fn require_title_and_body(input: &PostInput) -> ApiResult<()> {
    if input.title.trim().is_empty() || input.body.trim().is_empty() {
        return Err(ApiError::Validation(
            "Title and body are required".to_string(),
        ));
    }
    Ok(())
}
