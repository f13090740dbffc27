//! The short link body shared by shorten, stats, and listing responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// A stored short link as clients see it.
///
/// ```json
/// {
///   "short_code": "Ab3xYz_9",
///   "short_url": "https://s.example.com/Ab3xYz_9",
///   "original_url": "https://example.com/page",
///   "clicks": 0,
///   "created_at": "2026-08-06T12:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortLinkBody {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_clicked: Option<DateTime<Utc>>,
}

impl ShortLinkBody {
    /// Builds the response body from a stored link and its public short URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            short_code: link.code,
            short_url,
            original_url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
            last_clicked: link.last_clicked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_link_maps_fields() {
        let link = Link::new(
            7,
            "abc12345".to_string(),
            "https://example.com/page".to_string(),
            Utc::now(),
        );

        let body = ShortLinkBody::from_link(link, "https://s.example.com/abc12345".to_string());

        assert_eq!(body.short_code, "abc12345");
        assert_eq!(body.short_url, "https://s.example.com/abc12345");
        assert_eq!(body.original_url, "https://example.com/page");
        assert_eq!(body.clicks, 0);
        assert!(body.last_clicked.is_none());
    }

    #[test]
    fn test_serialization_omits_unset_last_clicked() {
        let link = Link::new(
            7,
            "abc12345".to_string(),
            "https://example.com/".to_string(),
            Utc::now(),
        );
        let body = ShortLinkBody::from_link(link, "https://s.example.com/abc12345".to_string());

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("last_clicked").is_none());
        assert_eq!(json["clicks"], 0);
    }
}
