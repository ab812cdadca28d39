//! Booking Model

use serde::{Deserialize, Serialize};

/// Booking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum BookingStatus {
    /// Counts against slot capacity
    Confirmed,
    /// Kept for history, frees its PCs
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub slot_id: i64,
    pub cafe_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub gaming_handle: String,
    pub num_pcs: i64,
    pub status: BookingStatus,
    pub created_at: i64,
}

/// Booking joined with its café and slot (confirmation and listings)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingDetail {
    pub id: i64,
    pub slot_id: i64,
    pub cafe_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub gaming_handle: String,
    pub num_pcs: i64,
    pub status: BookingStatus,
    pub created_at: i64,
    pub cafe_name: String,
    pub cafe_address: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Create booking payload (`POST /api/bookings`)
///
/// Every field is optional at the wire level so that missing values
/// surface as validation errors instead of body rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingCreate {
    pub slot_id: Option<i64>,
    /// When present it must match the slot's café
    pub cafe_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub gaming_handle: Option<String>,
    /// Defaults to 1
    pub num_pcs: Option<i64>,
}

/// Validated booking insert
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub slot_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub gaming_handle: String,
    pub num_pcs: i64,
}

/// Query string of the booking lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingQuery {
    pub email: Option<String>,
}
