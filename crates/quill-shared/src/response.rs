//! The API's single error shape.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint: `{"error": "..."}`.
///
/// Messages are human-readable, not machine codes; clients key off the
/// HTTP status, not the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
