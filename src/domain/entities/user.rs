//! Customer account entity.

use chrono::{DateTime, Utc};

/// A registered customer.
///
/// `email` is always stored normalized (trimmed, lower-cased) and is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: i64, name: String, email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}

/// Input data for creating a user. Also used for full (PUT) updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
