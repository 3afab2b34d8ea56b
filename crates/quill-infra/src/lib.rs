//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the database-backed repository, the in-memory
//! repository used without a database (and in tests), and the cache.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL repository via SeaORM

pub mod cache;
pub mod database;
pub mod repository;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use repository::InMemoryPostRepository;

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
