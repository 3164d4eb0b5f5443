//! Error types used throughout the capture engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for CapGrab
///
/// Almost every degraded condition in the capture pipeline is expressed as
/// data (warnings, diagnostics, lowered confidence) inside the returned
/// `ParseResult`. The variants here cover the few conditions that are genuine
/// caller errors and cannot be recovered internally.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CaptureError {
    /// The request named a timezone the datetime library cannot resolve.
    #[error("Unresolvable timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for CapGrab operations
pub type Result<T> = std::result::Result<T, CaptureError>;
