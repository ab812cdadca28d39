//! Unified error system for the café booking service
//!
//! This module provides a comprehensive error handling system with:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorResponse`]: The `{code, message, details?}` envelope sent to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Café errors
//! - 4xxx: Slot errors
//! - 5xxx: Booking errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::SlotNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::SlotCapacityExceeded, "Only 3 PC(s) available for this slot");
//!
//! // Create an error with details
//! let err = AppError::validation("Invalid email address")
//!     .with_detail("field", "user_email");
//!
//! // Convert to the wire envelope
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
