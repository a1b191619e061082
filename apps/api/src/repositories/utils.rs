//! Helpers shared by the repositories

/// Escape ILIKE metacharacters so user input matches literally
///
/// `%` and `_` are wildcards inside ILIKE patterns, and `\` is the escape
/// character; all three must be escaped before interpolating a search
/// query into a pattern.
///
/// # Example
/// ```
/// use nosh_api::repositories::utils::escape_ilike;
///
/// assert_eq!(escape_ilike("100%"), r"100\%");
/// ```
pub fn escape_ilike(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

// Column lists shared by the SELECT/RETURNING clauses of each repository,
// so every query hydrates the same model shape.

pub const USER_COLUMNS: &str = r#"
    id, email, password_hash, role, verified,
    created_at, updated_at
"#;

pub const VERIFICATION_COLUMNS: &str = r#"
    id, code, user_id, created_at
"#;

pub const RESTAURANT_COLUMNS: &str = r#"
    id, name, cover_image, address, owner_id, category_id,
    created_at, updated_at
"#;

pub const CATEGORY_COLUMNS: &str = r#"
    id, name, slug, cover_image, created_at, updated_at
"#;

pub const DISH_COLUMNS: &str = r#"
    id, name, price, photo, description, restaurant_id, options,
    created_at, updated_at
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ilike_passthrough() {
        assert_eq!(escape_ilike("seoul kitchen"), "seoul kitchen");
        assert_eq!(escape_ilike(""), "");
    }

    #[test]
    fn test_escape_ilike_wildcards() {
        assert_eq!(escape_ilike("100% beef"), r"100\% beef");
        assert_eq!(escape_ilike("egg_noodle"), r"egg\_noodle");
    }

    #[test]
    fn test_escape_ilike_escape_char_first() {
        // Backslashes must be doubled before the wildcard escapes run
        assert_eq!(escape_ilike(r"a\%b"), r"a\\\%b");
    }
}
