//! Time Slot Model

use serde::{Deserialize, Serialize};

/// Bookable time window with a PC capacity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TimeSlot {
    pub id: i64,
    pub cafe_id: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub available_pcs: i64,
    pub is_available: bool,
}

/// Slot with live capacity (public slot listing)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SlotAvailability {
    pub id: i64,
    pub cafe_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub available_pcs: i64,
    pub is_available: bool,
    /// Sum of `num_pcs` over confirmed bookings
    pub booked_pcs: i64,
    pub remaining_pcs: i64,
    pub is_bookable: bool,
}

/// Slot with booking stats (owner dashboard)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OwnerSlot {
    pub id: i64,
    pub cafe_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub available_pcs: i64,
    pub is_available: bool,
    pub booked_pcs: i64,
    pub booking_count: i64,
}

/// Create slot payload (`POST /api/owner/slots`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotCreate {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Defaults to the café's PC count
    pub available_pcs: Option<i64>,
}

/// Toggle slot availability payload (`PUT /api/owner/slots`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotAvailabilityUpdate {
    pub slot_id: Option<i64>,
    pub is_available: Option<bool>,
}

/// Query string of the public slot listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotQuery {
    pub date: Option<String>,
}
