//! Demo data
//!
//! Three Bangalore cafés with the same game catalogue, a week of two-hour
//! slots starting today, and one owner account per café.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::db::repository::slot::NewSlot;
use crate::db::repository::{RepoError, RepoResult, cafe, game, owner, slot};
use shared::models::{CafeCreate, OwnerCreate};

/// Password shared by every demo owner
pub const DEMO_PASSWORD: &str = "password123";

/// Number of days of slots to generate, today included
pub const DEMO_DAYS: i64 = 7;

pub const DEMO_GAMES: [&str; 13] = [
    "Valorant",
    "CS:GO",
    "Dota 2",
    "League of Legends",
    "Fortnite",
    "Apex Legends",
    "Overwatch 2",
    "PUBG",
    "GTA V",
    "Minecraft",
    "Call of Duty: Warzone",
    "Rocket League",
    "Rainbow Six Siege",
];

/// Daily two-hour windows, the last one ending at midnight
pub const DEMO_WINDOWS: [(&str, &str); 7] = [
    ("10:00", "12:00"),
    ("12:00", "14:00"),
    ("14:00", "16:00"),
    ("16:00", "18:00"),
    ("18:00", "20:00"),
    ("20:00", "22:00"),
    ("22:00", "00:00"),
];

struct DemoCafe {
    cafe: CafeCreate,
    username: &'static str,
    email: &'static str,
}

fn demo_cafes() -> Vec<DemoCafe> {
    vec![
        DemoCafe {
            cafe: CafeCreate {
                name: "GameZone Arena".into(),
                address: "MG Road, Bangalore - 560001".into(),
                description: Some(
                    "Premium gaming cafe with high-end hardware and comfortable seating".into(),
                ),
                num_pcs: 25,
                gpu_specs: "NVIDIA RTX 4080".into(),
                cpu_specs: Some("Intel i9-13900K".into()),
                ram_specs: Some("32GB DDR5".into()),
                photo_url: Some(
                    "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800".into(),
                ),
            },
            username: "gamezone_owner",
            email: "owner@gamezone.com",
        },
        DemoCafe {
            cafe: CafeCreate {
                name: "Cyber Knights Gaming".into(),
                address: "Koramangala 4th Block, Bangalore - 560034".into(),
                description: Some("Esports-ready cafe with tournament hosting facilities".into()),
                num_pcs: 30,
                gpu_specs: "NVIDIA RTX 4070 Ti".into(),
                cpu_specs: Some("AMD Ryzen 9 7950X".into()),
                ram_specs: Some("32GB DDR5".into()),
                photo_url: Some(
                    "https://images.unsplash.com/photo-1593305841991-05c297ba4575?w=800".into(),
                ),
            },
            username: "cyberknights_owner",
            email: "owner@cyberknights.com",
        },
        DemoCafe {
            cafe: CafeCreate {
                name: "Pixel Paradise".into(),
                address: "Indiranagar 100 Feet Road, Bangalore - 560038".into(),
                description: Some("Cozy gaming lounge with a wide variety of games".into()),
                num_pcs: 20,
                gpu_specs: "NVIDIA RTX 4060 Ti".into(),
                cpu_specs: Some("Intel i7-13700K".into()),
                ram_specs: Some("16GB DDR5".into()),
                photo_url: Some(
                    "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=800".into(),
                ),
            },
            username: "pixelparadise_owner",
            email: "owner@pixelparadise.com",
        },
    ]
}

/// Seed demo data into an empty database
///
/// Returns `false` without touching anything when cafés already exist.
pub async fn seed_demo_data(pool: &SqlitePool) -> RepoResult<bool> {
    if cafe::count(pool).await? > 0 {
        tracing::debug!("Cafes already present, skipping demo seed");
        return Ok(false);
    }

    // Shared by all demo owners
    let password_hash = hash_password(DEMO_PASSWORD)
        .map_err(|e| RepoError::Database(format!("Failed to hash demo password: {e}")))?;

    let today = Utc::now().date_naive();

    for demo in demo_cafes() {
        let created = cafe::create(pool, demo.cafe).await?;

        for name in DEMO_GAMES {
            game::create(pool, created.id, name).await?;
        }

        for offset in 0..DEMO_DAYS {
            let date = (today + Duration::days(offset))
                .format("%Y-%m-%d")
                .to_string();
            for (start, end) in DEMO_WINDOWS {
                slot::create(
                    pool,
                    NewSlot {
                        cafe_id: created.id,
                        date: date.clone(),
                        start_time: start.into(),
                        end_time: end.into(),
                        available_pcs: created.num_pcs,
                    },
                )
                .await?;
            }
        }

        owner::create(
            pool,
            OwnerCreate {
                cafe_id: created.id,
                username: demo.username.into(),
                password_hash: password_hash.clone(),
                email: Some(demo.email.into()),
            },
        )
        .await?;

        tracing::info!(cafe = %created.name, owner = demo.username, "Seeded demo cafe");
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::db::repository::slot::DateFilter;
    use crate::db::repository::test_support::memory_pool;

    #[tokio::test]
    async fn test_seed_populates_empty_database() {
        let pool = memory_pool().await;
        assert!(seed_demo_data(&pool).await.unwrap());

        let cafes = cafe::find_all(&pool).await.unwrap();
        assert_eq!(cafes.len(), 3);

        for c in &cafes {
            assert_eq!(game::find_by_cafe(&pool, c.id).await.unwrap().len(), 13);

            let slots = slot::find_availability(&pool, c.id, DateFilter::From(&shared::util::today()))
                .await
                .unwrap();
            assert_eq!(slots.len(), (DEMO_DAYS as usize) * DEMO_WINDOWS.len());
            assert!(slots.iter().all(|s| s.available_pcs == c.num_pcs && s.is_bookable));
        }

        let owner = owner::find_by_username(&pool, "cyberknights_owner")
            .await
            .unwrap()
            .unwrap();
        let cyber = cafes
            .iter()
            .find(|c| c.name == "Cyber Knights Gaming")
            .unwrap();
        assert_eq!(owner.cafe_id, cyber.id);
        assert!(verify_password(DEMO_PASSWORD, &owner.password_hash));
    }

    #[tokio::test]
    async fn test_seed_skips_populated_database() {
        let pool = memory_pool().await;
        assert!(seed_demo_data(&pool).await.unwrap());
        assert!(!seed_demo_data(&pool).await.unwrap());
        assert_eq!(cafe::count(&pool).await.unwrap(), 3);
    }
}
