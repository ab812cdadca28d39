//! Booking API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use shared::error::ErrorCode;
use shared::models::{BookingCreate, BookingDetail, BookingQuery, NewBooking};

use crate::core::ServerState;
use crate::db::repository::{booking, slot};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, require_text, validate_email,
};
use crate::{AppError, AppResult};

/// POST /api/bookings - reserve PCs in a slot
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<(StatusCode, Json<BookingDetail>)> {
    let slot_id = payload
        .slot_id
        .ok_or_else(|| AppError::required_field("slot_id"))?;
    let user_name = require_text(payload.user_name, "user_name", MAX_NAME_LEN)?;
    let user_email = require_text(payload.user_email, "user_email", MAX_EMAIL_LEN)?;
    let gaming_handle = require_text(payload.gaming_handle, "gaming_handle", MAX_SHORT_TEXT_LEN)?;
    validate_email(&user_email, "user_email")?;

    let num_pcs = payload.num_pcs.unwrap_or(1);
    if num_pcs < 1 {
        return Err(AppError::with_message(
            ErrorCode::BookingInvalidPcCount,
            "num_pcs must be at least 1",
        )
        .with_detail("field", "num_pcs"));
    }

    let slot = slot::find_by_id(state.pool(), slot_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SlotNotFound))?;
    if payload.cafe_id.is_some_and(|cafe_id| cafe_id != slot.cafe_id) {
        return Err(AppError::new(ErrorCode::SlotCafeMismatch).with_detail("slot_id", slot_id));
    }

    let detail = booking::create(
        state.pool(),
        NewBooking {
            slot_id,
            user_name,
            user_email,
            gaming_handle,
            num_pcs,
        },
    )
    .await
    .inspect_err(|e| tracing::info!(slot_id, num_pcs, reason = %e, "Booking rejected"))?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/bookings?email= - a player's bookings, newest slot first
pub async fn find_by_email(
    State(state): State<ServerState>,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let email = query
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::required_field("email"))?;

    let bookings = booking::find_by_email(state.pool(), &email).await?;
    Ok(Json(bookings))
}
