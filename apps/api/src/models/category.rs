//! Category models

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Restaurant category from the categories table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    /// Unique category identifier
    pub id: Uuid,

    /// Display name, e.g. "Korean BBQ"
    pub name: String,

    /// URL-safe unique identifier derived from the name
    pub slug: String,

    /// URL of the cover image (optional)
    pub cover_image: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Derive the URL-safe slug for a category name
    ///
    /// Deterministic: trimmed, lower-cased, spaces become hyphens. Two
    /// names that differ only in case or surrounding whitespace map to
    /// the same slug and therefore the same category row.
    pub fn slugify(name: &str) -> String {
        name.trim().to_lowercase().replace(' ', "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(Category::slugify("Korean BBQ"), "korean-bbq");
        assert_eq!(Category::slugify("Pizza"), "pizza");
    }

    #[test]
    fn test_slugify_trims_surrounding_whitespace() {
        assert_eq!(Category::slugify("  Fast Food "), "fast-food");
    }

    #[test]
    fn test_slugify_is_deterministic_across_case() {
        assert_eq!(
            Category::slugify("KOREAN bbq"),
            Category::slugify("korean BBQ")
        );
    }
}
