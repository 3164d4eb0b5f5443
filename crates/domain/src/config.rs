//! Configuration for capture building behavior

use serde::{Deserialize, Serialize};

/// Configuration for capture building behavior
///
/// The defaults mirror the shipped product configuration. The keyword tables
/// used by the kind classifier live with the classifier itself; this struct
/// carries only the temporal and presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Default event duration in minutes when no explicit end was matched
    /// (default: 60)
    pub default_event_duration_mins: u32,

    /// Default reminder lead time in minutes attached to every capture
    /// (default: 10)
    pub default_reminder_mins: u32,

    /// Hour of day for the default task due time (default: 17)
    pub default_due_hour: u32,

    /// Minute of the default task due time (default: 0)
    pub default_due_minute: u32,

    /// BCP 47 locale tag used by presentation layers (default: "en-US")
    pub locale: String,

    /// IANA timezone used when the caller supplies none (default: "UTC")
    pub fallback_timezone: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            default_event_duration_mins: 60,
            default_reminder_mins: 10,
            default_due_hour: 17,
            default_due_minute: 0,
            locale: "en-US".to_string(),
            fallback_timezone: "UTC".to_string(),
        }
    }
}
