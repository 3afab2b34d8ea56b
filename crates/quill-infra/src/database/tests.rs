use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use quill_core::domain::{NewPost, PageRequest, PostPatch};
use quill_core::ports::PostRepository;

use super::entity::post;
use super::postgres_repo::PostgresPostRepository;

fn sample_model(id: i64, title: &str) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        body: "Content".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_by_id_maps_row_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_model(7, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_id(7).await.unwrap().unwrap();

    assert_eq!(post.id, 7);
    assert_eq!(post.title, "Test Post");
}

#[tokio::test]
async fn find_by_id_miss_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.find_by_id(7).await.unwrap().is_none());
}

#[tokio::test]
async fn create_returns_store_assigned_row() {
    // Postgres inserts go through RETURNING, so the mock answers a query.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_model(1, "T")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo
        .create(NewPost {
            title: "T".into(),
            body: "B".into(),
        })
        .await
        .unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn update_missing_row_is_none_without_update_statement() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo
        .update(
            9,
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
async fn delete_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.delete(1).await.unwrap());
    assert!(!repo.delete(1).await.unwrap());
}

#[tokio::test]
async fn list_combines_count_and_page_fetch() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([(
            "num_items",
            Into::<Value>::into(15i64),
        )])]])
        .append_query_results([vec![sample_model(15, "Newest"), sample_model(14, "Older")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let page = repo
        .list(PageRequest { page: 2, limit: 10 })
        .await
        .unwrap();

    assert_eq!(page.total_items, 15);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.posts.len(), 2);
    assert_eq!(page.posts[0].title, "Newest");
}
