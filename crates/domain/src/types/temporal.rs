//! Temporal candidate types
//!
//! These types sit on the boundary with the external natural-language
//! date/time recognizer. The recognizer reports naive component sets with
//! per-component certainty flags; the temporal resolver in the core crate
//! turns them into timezone-qualified spans.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One parsed date/time component set from the recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalComponents {
    /// The parsed instant, naive (no timezone attached yet)
    pub date_time: NaiveDateTime,

    /// True when the matched text explicitly specified an hour
    pub certain_hour: bool,

    /// True when the matched text explicitly specified a minute
    pub certain_minute: bool,

    /// UTC offset in minutes when the match carried an explicit offset
    /// (e.g. "3pm UTC+2"); None for plain wall-clock matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_mins: Option<i32>,
}

impl TemporalComponents {
    /// A date-only component set (no certain clock time).
    pub fn date_only(date_time: NaiveDateTime) -> Self {
        Self { date_time, certain_hour: false, certain_minute: false, utc_offset_mins: None }
    }

    /// A component set with an explicit clock time.
    pub fn with_time(date_time: NaiveDateTime) -> Self {
        Self { date_time, certain_hour: true, certain_minute: true, utc_offset_mins: None }
    }
}

/// A single ranked date/time interpretation for a span of text
///
/// Candidates arrive ordered by the recognizer's own likelihood ranking;
/// index 0 is the most likely reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalCandidate {
    /// Start component set
    pub start: TemporalComponents,

    /// End component set when the match described a range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<TemporalComponents>,

    /// The source substring the recognizer matched
    pub matched_text: String,
}

/// A candidate normalized into the request timezone by the temporal resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSpan {
    /// Zone-qualified start instant
    pub start: DateTime<FixedOffset>,

    /// Zone-qualified end instant; never before `start`
    pub end: DateTime<FixedOffset>,

    /// True when the candidate carried no certain hour or minute
    pub all_day: bool,

    /// The source substring the recognizer matched
    pub matched_text: String,
}
