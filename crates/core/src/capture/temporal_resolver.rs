//! Temporal resolver - normalizes recognizer candidates into the request zone
//!
//! The external recognizer reports naive component sets with per-component
//! certainty flags and, occasionally, an explicit UTC offset. This module
//! turns each ranked candidate into a zone-qualified span with a concrete
//! end instant and an all-day flag, preserving the recognizer's ordering.

use capgrab_domain::{CaptureConfig, ResolvedSpan, TemporalCandidate, TemporalComponents};
use chrono::{DateTime, Duration, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;

/// Normalizes ranked temporal candidates into the working timezone
pub struct TemporalResolver {
    default_duration: Duration,
}

impl TemporalResolver {
    /// Create a resolver using the configured default event duration.
    pub fn new(config: &CaptureConfig) -> Self {
        Self { default_duration: Duration::minutes(i64::from(config.default_event_duration_mins)) }
    }

    /// Resolve all candidates, preserving the recognizer's likelihood order.
    ///
    /// An empty input yields an empty output; "no temporal match" is a
    /// normal outcome the caller handles by falling back to task semantics.
    pub fn resolve(&self, candidates: &[TemporalCandidate], tz: Tz) -> Vec<ResolvedSpan> {
        candidates.iter().map(|candidate| self.resolve_candidate(candidate, tz)).collect()
    }

    fn resolve_candidate(&self, candidate: &TemporalCandidate, tz: Tz) -> ResolvedSpan {
        let start = Self::normalize(&candidate.start, tz);

        // Explicit end when the match described a range, otherwise the
        // configured default duration. An explicit end that lands before the
        // start is discarded in favor of the default.
        let end = match &candidate.end {
            Some(components) => {
                let end = Self::normalize(components, tz);
                if end < start {
                    start + self.default_duration
                } else {
                    end
                }
            }
            None => start + self.default_duration,
        };

        // All-day when the start match carried no certain clock component.
        let all_day = !candidate.start.certain_hour && !candidate.start.certain_minute;

        ResolvedSpan {
            start: start.fixed_offset(),
            end: end.fixed_offset(),
            all_day,
            matched_text: candidate.matched_text.clone(),
        }
    }

    /// Attach a timezone to a naive component set.
    ///
    /// With an explicit offset the parsed instant is interpreted as UTC,
    /// shifted back by the offset, then converted into the target zone.
    /// Without one the instant is taken as local wall-clock time in the
    /// target zone directly.
    fn normalize(components: &TemporalComponents, tz: Tz) -> DateTime<Tz> {
        match components.utc_offset_mins {
            Some(offset) => {
                let utc =
                    Utc.from_utc_datetime(&components.date_time) - Duration::minutes(offset.into());
                utc.with_timezone(&tz)
            }
            None => match tz.from_local_datetime(&components.date_time) {
                LocalResult::Single(dt) => dt,
                // DST fold: take the earliest valid interpretation
                LocalResult::Ambiguous(earliest, _) => earliest,
                // DST gap: fall back to reading the components as UTC
                LocalResult::None => {
                    Utc.from_utc_datetime(&components.date_time).with_timezone(&tz)
                }
            },
        }
    }
}
