//! Owner Dashboard Handlers
//!
//! All queries are scoped to the café in the owner's session.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use shared::client::SuccessResponse;
use shared::error::ErrorCode;
use shared::models::{
    BookingDetail, Cafe, CafeUpdate, OwnerSlot, SlotAvailabilityUpdate, SlotCreate, TimeSlot,
};

use crate::api::cafes::validate_update;
use crate::auth::CurrentOwner;
use crate::core::ServerState;
use crate::db::repository::slot::NewSlot;
use crate::db::repository::{RepoError, booking, cafe, slot};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, require_text, validate_date,
    validate_pc_count, validate_time,
};
use crate::{AppError, AppResult};

/// GET /api/owner/bookings - bookings of the owner's café, newest slot first
pub async fn list_bookings(
    State(state): State<ServerState>,
    Extension(owner): Extension<CurrentOwner>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let bookings = booking::find_by_cafe(state.pool(), owner.cafe_id).await?;
    Ok(Json(bookings))
}

/// GET /api/owner/slots - every slot of the owner's café with booking totals
pub async fn list_slots(
    State(state): State<ServerState>,
    Extension(owner): Extension<CurrentOwner>,
) -> AppResult<Json<Vec<OwnerSlot>>> {
    let slots = slot::find_for_owner(state.pool(), owner.cafe_id).await?;
    Ok(Json(slots))
}

/// PUT /api/owner/slots - open or close a slot
pub async fn set_slot_availability(
    State(state): State<ServerState>,
    Extension(owner): Extension<CurrentOwner>,
    Json(payload): Json<SlotAvailabilityUpdate>,
) -> AppResult<Json<SuccessResponse>> {
    let slot_id = payload
        .slot_id
        .ok_or_else(|| AppError::required_field("slot_id"))?;
    let is_available = payload
        .is_available
        .ok_or_else(|| AppError::required_field("is_available"))?;

    slot::set_availability(state.pool(), slot_id, owner.cafe_id, is_available)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::SlotNotFound),
            other => other.into(),
        })?;

    tracing::info!(
        slot_id,
        cafe_id = owner.cafe_id,
        is_available,
        "Slot availability changed"
    );
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/owner/slots - add a time slot to the owner's café
pub async fn create_slot(
    State(state): State<ServerState>,
    Extension(owner): Extension<CurrentOwner>,
    Json(payload): Json<SlotCreate>,
) -> AppResult<(StatusCode, Json<TimeSlot>)> {
    let date = payload.date.ok_or_else(|| AppError::required_field("date"))?;
    let start_time = payload
        .start_time
        .ok_or_else(|| AppError::required_field("start_time"))?;
    let end_time = payload
        .end_time
        .ok_or_else(|| AppError::required_field("end_time"))?;

    validate_date(&date, "date")?;
    validate_time(&start_time, "start_time")?;
    validate_time(&end_time, "end_time")?;
    if start_time == end_time {
        return Err(AppError::new(ErrorCode::SlotInvalidWindow));
    }

    let available_pcs = match payload.available_pcs {
        Some(pcs) => pcs,
        None => {
            cafe::find_by_id(state.pool(), owner.cafe_id)
                .await?
                .ok_or_else(|| AppError::new(ErrorCode::CafeNotFound))?
                .num_pcs
        }
    };
    validate_pc_count(available_pcs, "available_pcs")?;

    let slot = slot::create(
        state.pool(),
        NewSlot {
            cafe_id: owner.cafe_id,
            date,
            start_time,
            end_time,
            available_pcs,
        },
    )
    .await?;

    tracing::info!(
        slot_id = slot.id,
        cafe_id = slot.cafe_id,
        date = %slot.date,
        start_time = %slot.start_time,
        "Slot created"
    );
    Ok((StatusCode::CREATED, Json(slot)))
}

/// PATCH /api/owner/cafe - partial profile update of the owner's café
pub async fn update_cafe(
    State(state): State<ServerState>,
    Extension(owner): Extension<CurrentOwner>,
    Json(mut payload): Json<CafeUpdate>,
) -> AppResult<Json<Cafe>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }

    // Present required columns may not be blanked
    payload.name = payload
        .name
        .map(|v| require_text(Some(v), "name", MAX_NAME_LEN))
        .transpose()?;
    payload.address = payload
        .address
        .map(|v| require_text(Some(v), "address", MAX_ADDRESS_LEN))
        .transpose()?;
    payload.gpu_specs = payload
        .gpu_specs
        .map(|v| require_text(Some(v), "gpu_specs", MAX_SHORT_TEXT_LEN))
        .transpose()?;
    validate_update(&payload)?;

    let cafe = cafe::update(state.pool(), owner.cafe_id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::CafeNotFound),
            other => other.into(),
        })?;

    tracing::info!(cafe_id = cafe.id, owner_id = owner.owner_id, "Cafe profile patched");
    Ok(Json(cafe))
}
