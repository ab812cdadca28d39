//! Cafe Repository

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeCreate, CafeUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, address, description, num_pcs, gpu_specs, cpu_specs, ram_specs, photo_url, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafes ORDER BY name");
    let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(pool).await?;
    Ok(cafes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let sql = format!("SELECT {COLUMNS} FROM cafes WHERE id = ?");
    let cafe = sqlx::query_as::<_, Cafe>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM cafes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM cafes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO cafes (name, address, description, num_pcs, gpu_specs, cpu_specs, ram_specs, photo_url, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.address)
    .bind(&data.description)
    .bind(data.num_pcs)
    .bind(&data.gpu_specs)
    .bind(&data.cpu_specs)
    .bind(&data.ram_specs)
    .bind(&data.photo_url)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cafe".into()))
}

/// Update the fields present in `data`, leaving the rest untouched
///
/// Nullable columns are written whenever they are present, so `Some(None)`
/// clears them.
pub async fn update(pool: &SqlitePool, id: i64, data: CafeUpdate) -> RepoResult<Cafe> {
    let rows = sqlx::query(
        "UPDATE cafes SET \
         name = COALESCE(?1, name), \
         address = COALESCE(?2, address), \
         description = CASE WHEN ?3 THEN ?4 ELSE description END, \
         num_pcs = COALESCE(?5, num_pcs), \
         gpu_specs = COALESCE(?6, gpu_specs), \
         cpu_specs = CASE WHEN ?7 THEN ?8 ELSE cpu_specs END, \
         ram_specs = CASE WHEN ?9 THEN ?10 ELSE ram_specs END, \
         photo_url = CASE WHEN ?11 THEN ?12 ELSE photo_url END \
         WHERE id = ?13",
    )
    .bind(&data.name)
    .bind(&data.address)
    .bind(data.description.is_some())
    .bind(data.description.as_ref().and_then(Option::as_deref))
    .bind(data.num_pcs)
    .bind(&data.gpu_specs)
    .bind(data.cpu_specs.is_some())
    .bind(data.cpu_specs.as_ref().and_then(Option::as_deref))
    .bind(data.ram_specs.is_some())
    .bind(data.ram_specs.as_ref().and_then(Option::as_deref))
    .bind(data.photo_url.is_some())
    .bind(data.photo_url.as_ref().and_then(Option::as_deref))
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))
}
