//! Product category entity.

use chrono::{DateTime, Utc};

/// A catalogue category.
///
/// Both `name` and `slug` are unique. The slug is derived from the name on
/// every create/update and is never set directly by clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: i64, name: String, slug: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            slug,
            created_at,
        }
    }
}

/// Input data for creating or renaming a category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}
