//! Client-facing request/response types
//!
//! Auth and acknowledgement DTOs exchanged with the owner dashboard.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
///
/// Fields are optional so a missing one is reported as a 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub owner: OwnerInfo,
    /// Same value as the `session` cookie, for Bearer clients
    pub token: String,
}

/// Owner information returned on login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub id: i64,
    pub cafe_id: i64,
    pub username: String,
    pub email: Option<String>,
}

/// Current owner response (`GET /api/auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentOwnerResponse {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub cafe_id: i64,
    pub cafe_name: String,
}

/// Plain acknowledgement body: `{"success": true}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
