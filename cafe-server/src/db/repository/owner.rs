//! Owner Repository

use super::{RepoError, RepoResult};
use shared::models::{Owner, OwnerCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Owner>> {
    let owner = sqlx::query_as::<_, Owner>(
        "SELECT id, cafe_id, username, password_hash, email, created_at FROM owners WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(owner)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Owner>> {
    let owner = sqlx::query_as::<_, Owner>(
        "SELECT id, cafe_id, username, password_hash, email, created_at FROM owners WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(owner)
}

pub async fn create(pool: &SqlitePool, data: OwnerCreate) -> RepoResult<Owner> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO owners (cafe_id, username, password_hash, email, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.cafe_id)
    .bind(&data.username)
    .bind(&data.password_hash)
    .bind(&data.email)
    .bind(now_millis())
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Owner '{}' already exists", data.username))
        }
        other => other,
    })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create owner".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{insert_cafe, memory_pool};

    fn owner_for(cafe_id: i64, username: &str) -> OwnerCreate {
        OwnerCreate {
            cafe_id,
            username: username.into(),
            password_hash: "$argon2id$v=19$placeholder".into(),
            email: Some("owner@gamezone.com".into()),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let pool = memory_pool().await;
        let cafe = insert_cafe(&pool, "GameZone Arena", 25).await;
        let owner = create(&pool, owner_for(cafe.id, "gamezone_owner"))
            .await
            .unwrap();

        let found = find_by_username(&pool, "gamezone_owner")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, owner.id);
        assert_eq!(found.cafe_id, cafe.id);
        assert_eq!(found.password_hash, "$argon2id$v=19$placeholder");
        assert!(find_by_username(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_is_unique() {
        let pool = memory_pool().await;
        let cafe = insert_cafe(&pool, "GameZone Arena", 25).await;
        create(&pool, owner_for(cafe.id, "gamezone_owner"))
            .await
            .unwrap();
        let err = create(&pool, owner_for(cafe.id, "gamezone_owner"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
