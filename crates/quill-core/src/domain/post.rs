use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single published article.
///
/// `id` and both timestamps are store-assigned; `created_at` is immutable
/// after insertion while `updated_at` moves on every successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Input for updating a post - title and body are replaced wholesale.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub body: String,
}

/// Requested page of the post collection, already clamped to sane values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

impl PageRequest {
    /// Build a page request from raw query-string values.
    ///
    /// Non-numeric or non-positive input falls back to the default instead
    /// of failing, matching how lenient blog clients pass these along.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Saturates instead of overflowing: an absurd page number lands past
    /// the end of the collection, which already yields an empty page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).filter(|n| *n > 0)
}

/// One page of posts together with the derived pagination descriptor.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PostPage {
    /// Assemble a page from fetched rows and the collection row count.
    ///
    /// `total_pages = ceil(total_items / limit)`; a request past the last
    /// page carries an empty `posts` but a fully computed descriptor.
    pub fn new(posts: Vec<Post>, request: PageRequest, total_items: u64) -> Self {
        Self {
            posts,
            page: request.page,
            limit: request.limit,
            total_items,
            total_pages: total_items.div_ceil(request.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults_on_missing_or_garbage() {
        assert_eq!(PageRequest::from_raw(None, None), PageRequest::default());
        assert_eq!(
            PageRequest::from_raw(Some("abc"), Some("-3")),
            PageRequest::default()
        );
        assert_eq!(
            PageRequest::from_raw(Some("0"), Some("0")),
            PageRequest::default()
        );
        assert_eq!(
            PageRequest::from_raw(Some("2"), Some("25")),
            PageRequest { page: 2, limit: 25 }
        );
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(PageRequest { page: 3, limit: 10 }.offset(), 20);
        assert_eq!(PageRequest { page: 2, limit: 7 }.offset(), 7);
    }

    #[test]
    fn offset_saturates_on_huge_page_numbers() {
        let req = PageRequest::from_raw(Some("18446744073709551615"), Some("10"));
        assert_eq!(req.page, u64::MAX);
        assert_eq!(req.offset(), u64::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        let req = PageRequest { page: 1, limit: 10 };
        assert_eq!(PostPage::new(vec![], req, 0).total_pages, 0);
        assert_eq!(PostPage::new(vec![], req, 10).total_pages, 1);
        assert_eq!(PostPage::new(vec![], req, 11).total_pages, 2);
        assert_eq!(PostPage::new(vec![], req, 15).total_pages, 2);
    }

    #[test]
    fn past_the_end_page_keeps_descriptor() {
        let req = PageRequest { page: 9, limit: 10 };
        let page = PostPage::new(vec![], req, 15);
        assert!(page.posts.is_empty());
        assert_eq!(page.page, 9);
        assert_eq!(page.total_items, 15);
        assert_eq!(page.total_pages, 2);
    }
}
