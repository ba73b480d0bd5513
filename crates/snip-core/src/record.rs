use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A shortened URL as held by the registry.
///
/// Records are immutable once created; the registry never rewrites or
/// removes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// The code assigned to `original_url`.
    pub code: ShortCode,
    /// When the record was created.
    pub created_at: Timestamp,
}

impl UrlRecord {
    /// Creates a record stamped with the current time.
    pub fn new(original_url: impl Into<String>, code: ShortCode) -> Self {
        Self {
            original_url: original_url.into(),
            code,
            created_at: Timestamp::now(),
        }
    }
}
