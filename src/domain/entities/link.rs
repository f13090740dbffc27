//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a short code and a long URL. The code is
/// unique across the store and immutable once assigned; only `clicks` and
/// `last_clicked` change after creation, and only through the store's
/// increment operation.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a fresh link record with zero clicks.
    pub fn new(id: i64, code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            long_url,
            clicks: 0,
            created_at,
            last_clicked: None,
        }
    }

    /// Returns true if the link has been resolved at least once.
    pub fn is_clicked(&self) -> bool {
        self.clicks > 0
    }
}

/// Input data for creating a new link.
///
/// The store assigns `id`, `created_at`, and the click counters.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc12345".to_string(),
            "https://example.com/".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc12345");
        assert_eq!(link.long_url, "https://example.com/");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert!(link.last_clicked.is_none());
        assert!(!link.is_clicked());
    }

    #[test]
    fn test_link_is_clicked() {
        let mut link = Link::new(
            1,
            "abc12345".to_string(),
            "https://example.com/".to_string(),
            Utc::now(),
        );
        link.clicks = 3;
        assert!(link.is_clicked());
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            code: "xyz78901".to_string(),
            long_url: "https://rust-lang.org/".to_string(),
        };

        assert_eq!(new_link.code, "xyz78901");
        assert_eq!(new_link.long_url, "https://rust-lang.org/");
    }
}
