//! Shared test helpers for `capgrab-core` integration tests.
//!
//! Provides a canned recognizer mock and request fixtures so the capture
//! service tests can focus on behaviour instead of boilerplate.

use std::sync::Arc;

use capgrab_core::{CaptureService, TemporalRecognizer};
use capgrab_domain::{CaptureConfig, ParseRequest, TemporalCandidate, TemporalComponents};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Reference "now" used across scenarios: Monday 2024-10-21 09:00 in
/// America/New_York (13:00 UTC, Eastern daylight time).
pub const TEST_TIMEZONE: &str = "America/New_York";

/// Recognizer mock returning a fixed candidate list for any input.
pub struct CannedRecognizer {
    candidates: Vec<TemporalCandidate>,
}

impl CannedRecognizer {
    pub fn new(candidates: Vec<TemporalCandidate>) -> Self {
        Self { candidates }
    }
}

impl TemporalRecognizer for CannedRecognizer {
    fn recognize(&self, _text: &str, _reference: DateTime<Tz>) -> Vec<TemporalCandidate> {
        self.candidates.clone()
    }
}

/// A capture service wired to a canned recognizer with default config.
pub fn service_with(candidates: Vec<TemporalCandidate>) -> CaptureService {
    CaptureService::new(CaptureConfig::default(), Arc::new(CannedRecognizer::new(candidates)))
}

/// A capture service whose recognizer never finds anything.
pub fn service_without_temporal() -> CaptureService {
    service_with(Vec::new())
}

/// A request for the given text with fixture page context and a pinned
/// reference "now" (Monday 2024-10-21 09:00 America/New_York).
pub fn request(text: &str) -> ParseRequest {
    ParseRequest {
        text: text.to_string(),
        url: "https://example.com/notes".to_string(),
        page_title: "Team Notes".to_string(),
        timezone: TEST_TIMEZONE.to_string(),
        forced_kind: None,
        now: Some(Utc.with_ymd_and_hms(2024, 10, 21, 13, 0, 0).single().unwrap()),
    }
}

fn naive(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap()
}

/// A candidate with an explicit clock time and no explicit end.
pub fn timed_candidate(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    matched: &str,
) -> TemporalCandidate {
    TemporalCandidate {
        start: TemporalComponents::with_time(naive(year, month, day, hour, minute)),
        end: None,
        matched_text: matched.to_string(),
    }
}

/// A date-only candidate (no certain hour or minute).
pub fn date_candidate(year: i32, month: u32, day: u32, matched: &str) -> TemporalCandidate {
    TemporalCandidate {
        start: TemporalComponents::date_only(naive(year, month, day, 0, 0)),
        end: None,
        matched_text: matched.to_string(),
    }
}
