//! Café API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{Cafe, CafeDetail, CafeUpdate, SlotAvailability, SlotQuery};
use shared::util::today;

use crate::auth::CurrentOwner;
use crate::core::ServerState;
use crate::db::repository::slot::DateFilter;
use crate::db::repository::{cafe, game, slot};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, require_text,
    validate_date, validate_optional_text, validate_pc_count,
};
use crate::{AppError, AppResult};

/// GET /api/cafes - all cafés, ordered by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Cafe>>> {
    let cafes = cafe::find_all(state.pool()).await?;
    Ok(Json(cafes))
}

/// GET /api/cafes/{id} - café profile with its games
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CafeDetail>> {
    let cafe = cafe::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CafeNotFound))?;
    let games = game::find_by_cafe(state.pool(), id).await?;
    Ok(Json(CafeDetail { cafe, games }))
}

/// PUT /api/cafes/{id} - full profile update by the café's own owner
pub async fn update(
    State(state): State<ServerState>,
    owner: CurrentOwner,
    Path(id): Path<i64>,
    Json(payload): Json<CafeUpdate>,
) -> AppResult<Json<Cafe>> {
    if !owner.manages(id) {
        tracing::warn!(
            owner_id = owner.owner_id,
            cafe_id = id,
            "Owner attempted to update another cafe"
        );
        return Err(AppError::new(ErrorCode::CafeAccessDenied));
    }

    let payload = payload.into_full_profile();
    let data = CafeUpdate {
        name: Some(require_text(payload.name, "name", MAX_NAME_LEN)?),
        address: Some(require_text(payload.address, "address", MAX_ADDRESS_LEN)?),
        gpu_specs: Some(require_text(
            payload.gpu_specs,
            "gpu_specs",
            MAX_SHORT_TEXT_LEN,
        )?),
        num_pcs: Some(payload.num_pcs.ok_or_else(|| AppError::required_field("num_pcs"))?),
        ..payload
    };
    validate_update(&data)?;

    if !cafe::exists(state.pool(), id).await? {
        return Err(AppError::new(ErrorCode::CafeNotFound));
    }
    let cafe = cafe::update(state.pool(), id, data).await?;

    tracing::info!(cafe_id = id, owner_id = owner.owner_id, "Cafe profile updated");
    Ok(Json(cafe))
}

/// GET /api/cafes/{id}/slots - slots with live capacity
///
/// Without `?date=` every slot from today onward is listed.
pub async fn list_slots(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<Vec<SlotAvailability>>> {
    if let Some(date) = &query.date {
        validate_date(date, "date")?;
    }
    if !cafe::exists(state.pool(), id).await? {
        return Err(AppError::new(ErrorCode::CafeNotFound));
    }

    let today = today();
    let filter = match &query.date {
        Some(date) => DateFilter::On(date),
        None => DateFilter::From(&today),
    };
    let slots = slot::find_availability(state.pool(), id, filter).await?;
    Ok(Json(slots))
}

/// Length and range checks for whichever profile fields are present
pub(crate) fn validate_update(data: &CafeUpdate) -> AppResult<()> {
    validate_optional_text(data.name.as_deref(), "name", MAX_NAME_LEN)?;
    validate_optional_text(data.address.as_deref(), "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(present(&data.description), "description", MAX_NOTE_LEN)?;
    validate_optional_text(data.gpu_specs.as_deref(), "gpu_specs", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(present(&data.cpu_specs), "cpu_specs", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(present(&data.ram_specs), "ram_specs", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(present(&data.photo_url), "photo_url", MAX_URL_LEN)?;
    if let Some(num_pcs) = data.num_pcs {
        validate_pc_count(num_pcs, "num_pcs")?;
    }
    Ok(())
}

/// Value of a nullable field, treating "absent" and "cleared" alike
fn present(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref())
}
