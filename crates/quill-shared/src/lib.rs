//! # Quill Shared
//!
//! Wire types shared between the API server and the client data layer.
//! Everything here mirrors the HTTP contract exactly, camelCase and all.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
