//! Capture record types
//!
//! A `Capture` is the structured output of parsing a span of user-selected
//! text: either a calendar event or a task, plus provenance, extracted
//! signals, and a confidence score for downstream UI cues.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Whether a capture describes a calendar event or a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKind {
    Event,
    Task,
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureKind::Event => write!(f, "event"),
            CaptureKind::Task => write!(f, "task"),
        }
    }
}

/// Task priority extracted from keyword signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A meeting attendee extracted from the selection text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address, lowercased
    pub email: String,

    /// Display name when known (local extraction never fills this)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Attendee {
    /// Build an attendee from a raw address match, normalizing case.
    pub fn from_email(email: &str) -> Self {
        Self { email: email.to_lowercase(), display_name: None }
    }
}

/// Provenance of the selection the capture was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceContext {
    /// URL of the page the text was selected on
    pub url: String,

    /// Title of that page
    pub page_title: String,
}

/// Variant-specific capture fields
///
/// Exactly one variant is active per capture; the serde tag doubles as the
/// capture's kind tag in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CaptureDetails {
    Event {
        /// Start instant, resolved in the request timezone
        start: DateTime<FixedOffset>,

        /// End instant; never before `start`
        end: DateTime<FixedOffset>,

        /// True when the matched text carried no certain clock time
        all_day: bool,

        /// Recurrence rule token (e.g. "FREQ=WEEKLY")
        #[serde(skip_serializing_if = "Option::is_none")]
        rrule: Option<String>,
    },
    Task {
        /// Due instant, resolved in the request timezone
        #[serde(skip_serializing_if = "Option::is_none")]
        due: Option<DateTime<FixedOffset>>,

        /// Priority from keyword signals
        #[serde(skip_serializing_if = "Option::is_none")]
        priority: Option<Priority>,

        /// Recurrence rule token (e.g. "FREQ=WEEKLY")
        #[serde(skip_serializing_if = "Option::is_none")]
        rrule: Option<String>,
    },
}

/// A structured capture built from a span of selected text
///
/// Captures are immutable once built: the engine creates a fresh record per
/// parse call and never mutates it afterwards. Editing before submission is
/// the confirmation layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    /// Unique identifier (UUID v7 string)
    pub id: String,

    /// Best-guess title, at most 64 display characters (ellipsized)
    pub title: String,

    /// Notes built from the source page title, URL and the quoted selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Location phrase or join URL when one was extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Attendees extracted from email-shaped substrings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<Attendee>>,

    /// Where the selection came from
    pub source: SourceContext,

    /// IANA timezone identifier the temporal fields were resolved in
    pub timezone: String,

    /// Classification confidence in [0.10, 0.98]
    pub confidence: f32,

    /// Reminder lead time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_mins: Option<u32>,

    /// Event- or task-specific fields
    pub details: CaptureDetails,
}

impl Capture {
    /// Kind tag derived from the active variant.
    pub fn kind(&self) -> CaptureKind {
        match self.details {
            CaptureDetails::Event { .. } => CaptureKind::Event,
            CaptureDetails::Task { .. } => CaptureKind::Task,
        }
    }
}

/// Immutable input to a parse call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The raw selected text
    pub text: String,

    /// URL of the source page
    pub url: String,

    /// Title of the source page
    pub page_title: String,

    /// IANA timezone to resolve temporal matches in
    pub timezone: String,

    /// Caller-forced kind; overrides all classification heuristics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced_kind: Option<CaptureKind>,

    /// Reference "now" override for deterministic parsing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now: Option<DateTime<Utc>>,
}

/// Advisory counters describing a parse call
///
/// Diagnostics are implementation-visible only; downstream logic never
/// consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    /// Number of temporal candidates the recognizer produced
    pub temporal_candidates: usize,

    /// Kind the classifier finally settled on
    pub chosen_kind: CaptureKind,

    /// Event keyword overlap score
    pub event_score: u32,

    /// Task keyword overlap score
    pub task_score: u32,
}

/// Output of a parse call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Primary capture built from the top-ranked interpretation
    pub capture: Capture,

    /// Up to 2 ranked alternatives, same kind as the primary, differing only
    /// in temporal fields; present only when more than one temporal candidate
    /// was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Capture>>,

    /// Human-readable non-fatal warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,

    /// Advisory counters
    pub diagnostics: ParseDiagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendee_from_email_lowercases() {
        let attendee = Attendee::from_email("John.Doe@Example.COM");

        assert_eq!(attendee.email, "john.doe@example.com");
        assert!(attendee.display_name.is_none());
    }

    #[test]
    fn capture_kind_follows_details_variant() {
        let details = CaptureDetails::Task { due: None, priority: None, rrule: None };
        let capture = Capture {
            id: "test".to_string(),
            title: String::new(),
            notes: None,
            location: None,
            attendees: None,
            source: SourceContext { url: String::new(), page_title: String::new() },
            timezone: "UTC".to_string(),
            confidence: 0.5,
            reminder_mins: None,
            details,
        };

        assert_eq!(capture.kind(), CaptureKind::Task);
    }

    #[test]
    fn details_serialize_with_kind_tag() {
        let details = CaptureDetails::Task { due: None, priority: Some(Priority::High), rrule: None };
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["kind"], "task");
        assert_eq!(json["priority"], "high");
        assert!(json.get("due").is_none(), "absent optionals should be omitted");
    }
}
