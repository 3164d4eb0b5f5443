//! Port interfaces for the capture engine

use capgrab_domain::TemporalCandidate;
use chrono::DateTime;
use chrono_tz::Tz;

/// Trait for the external natural-language date/time recognizer
///
/// The engine consumes ranked candidates (most likely first) and never
/// parses calendar grammar itself. Implementations wrap whatever recognizer
/// the host embeds; test suites supply canned candidates.
pub trait TemporalRecognizer: Send + Sync {
    /// Recognize date/time expressions in `text`, relative to `reference`.
    ///
    /// An empty vector means "no temporal match" and is a normal outcome,
    /// not an error.
    fn recognize(&self, text: &str, reference: DateTime<Tz>) -> Vec<TemporalCandidate>;
}
