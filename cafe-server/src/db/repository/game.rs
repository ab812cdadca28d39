//! Game Repository

use super::RepoResult;
use shared::models::Game;
use sqlx::SqlitePool;

pub async fn find_by_cafe(pool: &SqlitePool, cafe_id: i64) -> RepoResult<Vec<Game>> {
    let games = sqlx::query_as::<_, Game>(
        "SELECT id, cafe_id, game_name FROM games WHERE cafe_id = ? ORDER BY id",
    )
    .bind(cafe_id)
    .fetch_all(pool)
    .await?;
    Ok(games)
}

pub async fn create(pool: &SqlitePool, cafe_id: i64, game_name: &str) -> RepoResult<i64> {
    let id = sqlx::query_scalar("INSERT INTO games (cafe_id, game_name) VALUES (?, ?) RETURNING id")
        .bind(cafe_id)
        .bind(game_name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}
