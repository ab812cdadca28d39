//! Booking Repository
//!
//! Bookings are created with a guarded insert: the capacity check and the
//! write are one statement, so two concurrent requests can never both take
//! the last PCs of a slot.

use super::{RepoError, RepoResult};
use shared::error::{AppError, ErrorCode};
use shared::models::{BookingDetail, NewBooking};
use shared::util::now_millis;
use sqlx::{Sqlite, SqlitePool, Transaction};
use thiserror::Error;

const DETAIL_SELECT: &str = "SELECT b.id, b.slot_id, b.cafe_id, b.user_name, b.user_email, b.gaming_handle, \
            b.num_pcs, b.status, b.created_at, \
            c.name AS cafe_name, c.address AS cafe_address, \
            ts.date, ts.start_time, ts.end_time \
     FROM bookings b \
     JOIN cafes c ON c.id = b.cafe_id \
     JOIN time_slots ts ON ts.id = b.slot_id";

/// Why a booking could not be placed
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Slot not found")]
    SlotNotFound,

    #[error("This slot is not available")]
    SlotUnavailable,

    #[error("Only {remaining} PC(s) available for this slot")]
    InsufficientCapacity { remaining: i64 },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        BookingError::Repo(err.into())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::SlotNotFound => AppError::new(ErrorCode::SlotNotFound),
            BookingError::SlotUnavailable => AppError::new(ErrorCode::SlotUnavailable),
            BookingError::InsufficientCapacity { remaining } => {
                AppError::with_message(
                    ErrorCode::SlotCapacityExceeded,
                    format!("Only {remaining} PC(s) available for this slot"),
                )
                .with_detail("remaining_pcs", remaining)
            }
            BookingError::Repo(e) => e.into(),
        }
    }
}

/// Place a confirmed booking if the slot is open and has room
pub async fn create(pool: &SqlitePool, data: NewBooking) -> Result<BookingDetail, BookingError> {
    let mut tx = pool.begin().await?;

    let inserted: Option<i64> = sqlx::query_scalar(
        "INSERT INTO bookings (slot_id, cafe_id, user_name, user_email, gaming_handle, num_pcs, status, created_at) \
         SELECT ts.id, ts.cafe_id, ?, ?, ?, ?, 'confirmed', ? \
         FROM time_slots ts \
         WHERE ts.id = ? AND ts.is_available = 1 \
           AND ts.available_pcs - ( \
               SELECT COALESCE(SUM(b.num_pcs), 0) FROM bookings b \
               WHERE b.slot_id = ts.id AND b.status = 'confirmed' \
           ) >= ? \
         RETURNING id",
    )
    .bind(&data.user_name)
    .bind(&data.user_email)
    .bind(&data.gaming_handle)
    .bind(data.num_pcs)
    .bind(now_millis())
    .bind(data.slot_id)
    .bind(data.num_pcs)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(id) = inserted else {
        let reason = rejection_reason(&mut tx, data.slot_id).await?;
        tx.rollback().await?;
        return Err(reason);
    };

    let sql = format!("{DETAIL_SELECT} WHERE b.id = ?");
    let detail = sqlx::query_as::<_, BookingDetail>(&sql)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(
        booking_id = detail.id,
        slot_id = detail.slot_id,
        num_pcs = detail.num_pcs,
        "Booking confirmed"
    );
    Ok(detail)
}

/// Work out which guard stopped the insert
async fn rejection_reason(
    tx: &mut Transaction<'_, Sqlite>,
    slot_id: i64,
) -> Result<BookingError, BookingError> {
    let row: Option<(bool, i64)> = sqlx::query_as(
        "SELECT ts.is_available, ts.available_pcs - ( \
             SELECT COALESCE(SUM(b.num_pcs), 0) FROM bookings b \
             WHERE b.slot_id = ts.id AND b.status = 'confirmed' \
         ) \
         FROM time_slots ts WHERE ts.id = ?",
    )
    .bind(slot_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(match row {
        None => BookingError::SlotNotFound,
        Some((false, _)) => BookingError::SlotUnavailable,
        Some((true, remaining)) => BookingError::InsufficientCapacity {
            remaining: remaining.max(0),
        },
    })
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<BookingDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE b.id = ?");
    let booking = sqlx::query_as::<_, BookingDetail>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(booking)
}

/// Bookings made with an email address (case-insensitive), newest slot first
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Vec<BookingDetail>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE b.user_email = ? COLLATE NOCASE \
         ORDER BY ts.date DESC, ts.start_time DESC, b.id DESC"
    );
    let bookings = sqlx::query_as::<_, BookingDetail>(&sql)
        .bind(email)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}

/// Bookings of one café, newest slot first
pub async fn find_by_cafe(pool: &SqlitePool, cafe_id: i64) -> RepoResult<Vec<BookingDetail>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE b.cafe_id = ? \
         ORDER BY ts.date DESC, ts.start_time DESC, b.id DESC"
    );
    let bookings = sqlx::query_as::<_, BookingDetail>(&sql)
        .bind(cafe_id)
        .fetch_all(pool)
        .await?;
    Ok(bookings)
}
