//! Café Model

use serde::{Deserialize, Serialize};

use super::Game;
use super::serde_helpers::nullable;

/// Gaming café entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub num_pcs: i64,
    pub gpu_specs: String,
    pub cpu_specs: Option<String>,
    pub ram_specs: Option<String>,
    pub photo_url: Option<String>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

/// Café with its game catalogue (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeDetail {
    #[serde(flatten)]
    pub cafe: Cafe,
    pub games: Vec<Game>,
}

/// Create café payload (seeding and tooling)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub num_pcs: i64,
    pub gpu_specs: String,
    pub cpu_specs: Option<String>,
    pub ram_specs: Option<String>,
    pub photo_url: Option<String>,
}

/// Update café payload
///
/// `PUT /api/cafes/{id}` requires name, address, num_pcs and gpu_specs and
/// writes every profile column as sent. `PATCH /api/owner/cafe` accepts any
/// subset; for the nullable columns an explicit `null` clears the value
/// while an absent key leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CafeUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub num_pcs: Option<i64>,
    pub gpu_specs: Option<String>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub cpu_specs: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub ram_specs: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
}

impl CafeUpdate {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.description.is_none()
            && self.num_pcs.is_none()
            && self.gpu_specs.is_none()
            && self.cpu_specs.is_none()
            && self.ram_specs.is_none()
            && self.photo_url.is_none()
    }

    /// Turn a full profile into an update that overwrites every PUT column
    ///
    /// Absent optional specs become explicit clears. `photo_url` is not part
    /// of the full profile and stays untouched unless given.
    pub fn into_full_profile(self) -> Self {
        Self {
            description: Some(self.description.flatten()),
            cpu_specs: Some(self.cpu_specs.flatten()),
            ram_specs: Some(self.ram_specs.flatten()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Cafe {
        Cafe {
            id: 1,
            name: "GameZone Arena".into(),
            address: "MG Road".into(),
            description: None,
            num_pcs: 25,
            gpu_specs: "RTX 4080".into(),
            cpu_specs: Some("Intel i9-13900K".into()),
            ram_specs: None,
            photo_url: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_detail_flattens_cafe_fields() {
        let detail = CafeDetail {
            cafe: sample(),
            games: vec![Game {
                id: 7,
                cafe_id: 1,
                game_name: "Valorant".into(),
            }],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "GameZone Arena");
        assert_eq!(json["num_pcs"], 25);
        assert_eq!(json["games"][0]["game_name"], "Valorant");
        assert!(json.get("cafe").is_none());
    }

    #[test]
    fn test_update_is_empty() {
        let update: CafeUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        let update: CafeUpdate = serde_json::from_str(r#"{"num_pcs": 30}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.num_pcs, Some(30));
    }

    #[test]
    fn test_update_null_clears_optional_columns() {
        let update: CafeUpdate =
            serde_json::from_str(r#"{"description": null, "ram_specs": "64GB"}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.description, Some(None));
        assert_eq!(update.ram_specs, Some(Some("64GB".into())));
        assert_eq!(update.cpu_specs, None);

        let only_null: CafeUpdate = serde_json::from_str(r#"{"photo_url": null}"#).unwrap();
        assert!(!only_null.is_empty());
    }

    #[test]
    fn test_full_profile_clears_absent_specs() {
        let update: CafeUpdate =
            serde_json::from_str(r#"{"name": "GZ", "cpu_specs": "Ryzen 7"}"#).unwrap();
        let full = update.into_full_profile();
        assert_eq!(full.description, Some(None));
        assert_eq!(full.cpu_specs, Some(Some("Ryzen 7".into())));
        assert_eq!(full.ram_specs, Some(None));
        assert_eq!(full.photo_url, None);
    }
}
