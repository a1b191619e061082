//! Dish models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A selectable option group on a dish, e.g. "Spice Level" or "Size"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishOption {
    /// Option group name
    pub name: String,

    /// Choices the customer picks from
    #[serde(default)]
    pub choices: Vec<String>,

    /// Extra cost added when this option is picked
    #[serde(default)]
    pub extra: i32,
}

/// Dish from the dishes table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dish {
    /// Unique dish identifier
    pub id: Uuid,

    /// Dish name
    pub name: String,

    /// Price in the smallest currency unit
    pub price: i32,

    /// URL of the dish photo (optional)
    pub photo: Option<String>,

    /// Menu description
    pub description: String,

    /// Restaurant this dish belongs to
    pub restaurant_id: Uuid,

    /// Option groups as JSONB
    #[sqlx(json)]
    pub options: Vec<DishOption>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_option_serde_defaults() {
        // Older rows may carry option groups without choices or extra cost
        let opt: DishOption = serde_json::from_str(r#"{"name":"Spice Level"}"#).unwrap();
        assert_eq!(opt.name, "Spice Level");
        assert!(opt.choices.is_empty());
        assert_eq!(opt.extra, 0);
    }

    #[test]
    fn test_dish_option_round_trip() {
        let opt = DishOption {
            name: "Size".to_string(),
            choices: vec!["Small".to_string(), "Large".to_string()],
            extra: 200,
        };
        let json = serde_json::to_string(&opt).unwrap();
        let back: DishOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opt);
    }
}
