//! Confidence scorer
//!
//! A fixed deterministic formula, reproduced exactly for golden-output
//! parity with the shipped product. There is no learned component; the
//! score exists for downstream UI cues only and never drives logic.

use capgrab_domain::CaptureKind;

/// Lower clamp for any confidence value.
pub const MIN_CONFIDENCE: f32 = 0.10;

/// Upper clamp for any confidence value.
pub const MAX_CONFIDENCE: f32 = 0.98;

const BASE: f32 = 0.40;
const KEYWORD_STEP: f32 = 0.05;
const KEYWORD_CAP: u32 = 3;
const EVENT_WITH_DURATION_BONUS: f32 = 0.20;
const TASK_WITHOUT_DURATION_BONUS: f32 = 0.10;
const TEMPORAL_MATCH_BONUS: f32 = 0.15;

/// Compute a capture confidence in [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`].
///
/// Starts at 0.40, adds up to 0.15 from combined keyword strength (capped
/// at 3 x 0.05), 0.20 for an event with an established end, 0.10 for a task
/// with no duration context, and 0.15 when any temporal match was found.
pub fn score(
    kind: CaptureKind,
    event_score: u32,
    task_score: u32,
    has_duration: bool,
    has_temporal: bool,
) -> f32 {
    let mut confidence = BASE;

    confidence += (event_score + task_score).min(KEYWORD_CAP) as f32 * KEYWORD_STEP;

    match kind {
        CaptureKind::Event if has_duration => confidence += EVENT_WITH_DURATION_BONUS,
        CaptureKind::Task if !has_duration => confidence += TASK_WITHOUT_DURATION_BONUS,
        _ => {}
    }

    if has_temporal {
        confidence += TEMPORAL_MATCH_BONUS;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
