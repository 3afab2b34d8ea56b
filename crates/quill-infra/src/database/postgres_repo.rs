//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
    QuerySelect,
};

use quill_core::domain::{NewPost, PageRequest, Post, PostPage, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository. All access goes through SeaORM's
/// parameterized query builder; no SQL strings are assembled by hand.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, request: PageRequest) -> Result<PostPage, RepoError> {
        // Count and page fetch are separate statements. A write landing
        // between them can skew total_items by a row; accepted staleness.
        let total_items = PostEntity::find().count(&self.db).await.map_err(query_err)?;

        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .offset(request.offset())
            .limit(request.limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(PostPage::new(
            rows.into_iter().map(Into::into).collect(),
            request,
            total_items,
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            body: Set(input.body),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(query_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(existing) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.title = Set(patch.title);
        active.body = Set(patch.body);
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await.map_err(query_err)?;
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected > 0)
    }
}
