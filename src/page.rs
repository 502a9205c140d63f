use serde::{Deserialize, Serialize};

/// Pagination parameters sent by a caller preparing a paged query.
///
/// Pages are numbered from 1 by convention. Neither field is bounds-checked
/// here; a consuming system is expected to require both to be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageList {
    /// Requested page number (1-based).
    pub page: i64,

    /// Number of records requested per page.
    pub page_size: i64,
}

impl Default for PageList {
    /// The conventional first request: page 1, 20 records.
    fn default() -> Self {
        PageList {
            page: 1,
            page_size: 20,
        }
    }
}
