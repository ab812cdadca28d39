//! Time Slot Repository

use super::{RepoError, RepoResult};
use shared::models::{OwnerSlot, SlotAvailability, TimeSlot};
use sqlx::SqlitePool;

/// Which dates a slot listing covers
#[derive(Debug, Clone, Copy)]
pub enum DateFilter<'a> {
    /// Only this date
    On(&'a str),
    /// This date and later
    From(&'a str),
}

/// New slot, already validated
#[derive(Debug, Clone)]
pub struct NewSlot {
    pub cafe_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub available_pcs: i64,
}

/// Confirmed PCs per slot
const BOOKED_PCS: &str = "SELECT slot_id, SUM(num_pcs) AS booked, COUNT(*) AS bookings \
     FROM bookings WHERE status = 'confirmed' GROUP BY slot_id";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TimeSlot>> {
    let slot = sqlx::query_as::<_, TimeSlot>(
        "SELECT id, cafe_id, date, start_time, end_time, available_pcs, is_available \
         FROM time_slots WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(slot)
}

/// Public listing with live capacity, ordered by date then start time
pub async fn find_availability(
    pool: &SqlitePool,
    cafe_id: i64,
    filter: DateFilter<'_>,
) -> RepoResult<Vec<SlotAvailability>> {
    let (op, date) = match filter {
        DateFilter::On(date) => ("=", date),
        DateFilter::From(date) => (">=", date),
    };
    let sql = format!(
        "SELECT ts.id, ts.cafe_id, ts.date, ts.start_time, ts.end_time, ts.available_pcs, ts.is_available, \
                COALESCE(b.booked, 0) AS booked_pcs, \
                ts.available_pcs - COALESCE(b.booked, 0) AS remaining_pcs, \
                (ts.is_available = 1 AND ts.available_pcs - COALESCE(b.booked, 0) > 0) AS is_bookable \
         FROM time_slots ts \
         LEFT JOIN ({BOOKED_PCS}) b ON b.slot_id = ts.id \
         WHERE ts.cafe_id = ? AND ts.date {op} ? \
         ORDER BY ts.date, ts.start_time"
    );
    let slots = sqlx::query_as::<_, SlotAvailability>(&sql)
        .bind(cafe_id)
        .bind(date)
        .fetch_all(pool)
        .await?;
    Ok(slots)
}

/// Live capacity of a single slot
pub async fn find_availability_by_id(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<SlotAvailability>> {
    let sql = format!(
        "SELECT ts.id, ts.cafe_id, ts.date, ts.start_time, ts.end_time, ts.available_pcs, ts.is_available, \
                COALESCE(b.booked, 0) AS booked_pcs, \
                ts.available_pcs - COALESCE(b.booked, 0) AS remaining_pcs, \
                (ts.is_available = 1 AND ts.available_pcs - COALESCE(b.booked, 0) > 0) AS is_bookable \
         FROM time_slots ts \
         LEFT JOIN ({BOOKED_PCS}) b ON b.slot_id = ts.id \
         WHERE ts.id = ?"
    );
    let slot = sqlx::query_as::<_, SlotAvailability>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(slot)
}

/// Owner dashboard listing, every date, ordered by date then start time
pub async fn find_for_owner(pool: &SqlitePool, cafe_id: i64) -> RepoResult<Vec<OwnerSlot>> {
    let sql = format!(
        "SELECT ts.id, ts.cafe_id, ts.date, ts.start_time, ts.end_time, ts.available_pcs, ts.is_available, \
                COALESCE(b.booked, 0) AS booked_pcs, \
                COALESCE(b.bookings, 0) AS booking_count \
         FROM time_slots ts \
         LEFT JOIN ({BOOKED_PCS}) b ON b.slot_id = ts.id \
         WHERE ts.cafe_id = ? \
         ORDER BY ts.date, ts.start_time"
    );
    let slots = sqlx::query_as::<_, OwnerSlot>(&sql)
        .bind(cafe_id)
        .fetch_all(pool)
        .await?;
    Ok(slots)
}

pub async fn create(pool: &SqlitePool, data: NewSlot) -> RepoResult<TimeSlot> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO time_slots (cafe_id, date, start_time, end_time, available_pcs, is_available) \
         VALUES (?, ?, ?, ?, ?, 1) RETURNING id",
    )
    .bind(data.cafe_id)
    .bind(&data.date)
    .bind(&data.start_time)
    .bind(&data.end_time)
    .bind(data.available_pcs)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!(
            "A slot starting at {} on {} already exists",
            data.start_time, data.date
        )),
        other => other,
    })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create slot".into()))
}

/// Open or close a slot of the given café
///
/// Existing bookings are left as they are.
pub async fn set_availability(
    pool: &SqlitePool,
    id: i64,
    cafe_id: i64,
    is_available: bool,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE time_slots SET is_available = ? WHERE id = ? AND cafe_id = ?")
        .bind(is_available)
        .bind(id)
        .bind(cafe_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("Slot not found".into()));
    }
    Ok(())
}
