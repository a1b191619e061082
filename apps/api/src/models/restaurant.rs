//! Restaurant models

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Restaurant from the restaurants table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Restaurant {
    /// Unique restaurant identifier
    pub id: Uuid,

    /// Restaurant name
    pub name: String,

    /// URL of the cover image
    pub cover_image: String,

    /// Street address
    pub address: String,

    /// User who owns this restaurant
    pub owner_id: Uuid,

    /// Category the restaurant is filed under (optional)
    pub category_id: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Check whether the given user owns this restaurant
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(owner_id: Uuid) -> Restaurant {
        let now = Utc::now();
        Restaurant {
            id: Uuid::new_v4(),
            name: "Seoul Kitchen".to_string(),
            cover_image: "https://img.example/cover.png".to_string(),
            address: "1 Main St".to_string(),
            owner_id,
            category_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_owned_by() {
        let owner = Uuid::new_v4();
        let r = restaurant(owner);
        assert!(r.is_owned_by(owner));
        assert!(!r.is_owned_by(Uuid::new_v4()));
    }
}
