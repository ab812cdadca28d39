//! Café Owner Model

use serde::{Deserialize, Serialize};

/// Owner account (one café per owner)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Owner {
    pub id: i64,
    pub cafe_id: i64,
    pub username: String,
    /// Argon2 PHC string, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub email: Option<String>,
    pub created_at: i64,
}

/// Create owner payload (seeding)
#[derive(Debug, Clone)]
pub struct OwnerCreate {
    pub cafe_id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
}
