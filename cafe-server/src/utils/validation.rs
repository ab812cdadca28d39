//! Input validation helpers
//!
//! Centralized text length limits and the format checks shared by the
//! booking, slot and café handlers. SQLite TEXT has no built-in length
//! enforcement, so limits live here.

use chrono::{NaiveDate, NaiveTime};
use shared::error::{AppError, ErrorCode};
use validator::ValidateEmail;

// ── Text length limits ──────────────────────────────────────────────

/// Café names, player names
pub const MAX_NAME_LEN: usize = 200;

/// Café descriptions
pub const MAX_NOTE_LEN: usize = 1000;

/// Gaming handles, hardware specs, usernames
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Photo URLs
pub const MAX_URL_LEN: usize = 2048;

/// Street addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Text helpers ────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) if v.len() > max_len => Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field)),
        _ => Ok(()),
    }
}

/// Unwrap a required body field
///
/// Missing or blank values are reported as a missing field; the value is
/// returned trimmed.
pub fn require_text(value: Option<String>, field: &str, max_len: usize) -> Result<String, AppError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::required_field(field))?;
    validate_required_text(&value, field, max_len)?;
    Ok(value)
}

// ── Format helpers ──────────────────────────────────────────────────

/// Validate an email address
pub fn validate_email(email: &str, field: &str) -> Result<(), AppError> {
    if email.len() > MAX_EMAIL_LEN || !email.validate_email() {
        return Err(AppError::with_message(ErrorCode::InvalidFormat, "Invalid email address")
            .with_detail("field", field));
    }
    Ok(())
}

/// Validate a `YYYY-MM-DD` calendar date
pub fn validate_date(value: &str, field: &str) -> Result<(), AppError> {
    let well_formed = value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    if !well_formed {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be a valid date in YYYY-MM-DD format"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate an `HH:MM` 24-hour clock time
pub fn validate_time(value: &str, field: &str) -> Result<(), AppError> {
    let well_formed = value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok();
    if !well_formed {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be a valid time in HH:MM format"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a PC count (at least one)
pub fn validate_pc_count(value: i64, field: &str) -> Result<(), AppError> {
    if value < 1 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be at least 1"),
        )
        .with_detail("field", field));
    }
    Ok(())
}
