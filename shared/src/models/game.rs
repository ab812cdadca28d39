//! Game Model

use serde::{Deserialize, Serialize};

/// A game installed at a café
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Game {
    pub id: i64,
    pub cafe_id: i64,
    pub game_name: String,
}
