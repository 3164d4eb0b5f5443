//! Event-vs-task kind classifier
//!
//! Decides whether a span of text describes a calendar event or a task,
//! using keyword overlap scores plus the presence of temporal signals. The
//! decision policy is a fixed five-branch cascade, deliberately kept as an
//! explicit ordered sequence of guarded branches so the behavior stays
//! exactly reproducible.

use capgrab_domain::CaptureKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Explicit clock-time mentions: "2pm", "14:00", "2.30pm", "noon", "midnight"
static CLOCK_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:\d{1,2}[:.]\d{2}(?:\s*(?:am|pm))?|\d{1,2}\s*(?:am|pm)|noon|midnight)\b")
        .unwrap()
});

/// Immutable keyword tables for kind classification
///
/// "review" appears in both sets on purpose: it contributes to both scores
/// simultaneously, which affects tie-breaking for ambiguous inputs. Changing
/// that would alter classification, so it is preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub event_keywords: Vec<String>,
    pub task_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let event = [
            "meet", "meeting", "call", "sync", "standup", "retro", "review", "demo", "interview",
            "lecture", "class", "webinar", "workshop", "room", "zoom", "google meet", "teams",
        ];
        let task = [
            "submit", "finish", "complete", "send", "write", "todo", "follow up", "review",
            "ship", "publish", "draft", "prepare", "remind", "pay",
        ];

        Self {
            event_keywords: event.iter().map(|s| (*s).to_string()).collect(),
            task_keywords: task.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Outcome of kind classification, with the signals that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: CaptureKind,
    pub event_score: u32,
    pub task_score: u32,
    pub has_clock_time: bool,
}

/// Classifies text as describing an event or a task
pub struct KindClassifier {
    config: ClassifierConfig,
}

impl KindClassifier {
    /// Create a classifier with the default keyword tables.
    pub fn new() -> Self {
        Self { config: ClassifierConfig::default() }
    }

    /// Create a classifier with custom keyword tables.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// True when the text mentions an explicit clock time.
    pub fn has_explicit_clock_time(text: &str) -> bool {
        CLOCK_TIME_PATTERN.is_match(text)
    }

    /// Decide event or task.
    ///
    /// The branches are evaluated strictly in order:
    /// 1. A caller-forced kind wins unconditionally.
    /// 2. Temporal candidates exist and (an explicit clock time is present or
    ///    the event score is higher) - event.
    /// 3. No temporal candidates and the task score is at least the event
    ///    score - task.
    /// 4. Task score strictly higher - task.
    /// 5. Otherwise event when temporal candidates exist, task when not.
    ///
    /// The cascade is biased toward task on a tied score with no time found,
    /// and toward event when a clock time is explicit.
    pub fn classify(
        &self,
        text: &str,
        temporal_candidates: usize,
        forced: Option<CaptureKind>,
    ) -> Classification {
        let lower = text.to_lowercase();
        let event_score = Self::keyword_score(&lower, &self.config.event_keywords);
        let task_score = Self::keyword_score(&lower, &self.config.task_keywords);
        let has_clock_time = Self::has_explicit_clock_time(text);
        let has_temporal = temporal_candidates > 0;

        let kind = if let Some(forced_kind) = forced {
            forced_kind
        } else if has_temporal && (has_clock_time || event_score > task_score) {
            CaptureKind::Event
        } else if !has_temporal && task_score >= event_score {
            CaptureKind::Task
        } else if task_score > event_score {
            CaptureKind::Task
        } else if has_temporal {
            CaptureKind::Event
        } else {
            CaptureKind::Task
        };

        Classification { kind, event_score, task_score, has_clock_time }
    }

    /// Number of keywords from `keywords` present in the lowercased text.
    fn keyword_score(lower_text: &str, keywords: &[String]) -> u32 {
        keywords.iter().filter(|k| lower_text.contains(k.as_str())).count() as u32
    }
}

impl Default for KindClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_detection() {
        assert!(KindClassifier::has_explicit_clock_time("meet at 2pm"));
        assert!(KindClassifier::has_explicit_clock_time("starts 14:00 sharp"));
        assert!(KindClassifier::has_explicit_clock_time("around 2.30pm"));
        assert!(KindClassifier::has_explicit_clock_time("lunch at noon"));
        assert!(KindClassifier::has_explicit_clock_time("due by midnight"));

        assert!(!KindClassifier::has_explicit_clock_time("sometime tomorrow"));
        assert!(!KindClassifier::has_explicit_clock_time("in 2 days"));
    }

    #[test]
    fn forced_kind_overrides_everything() {
        let classifier = KindClassifier::new();

        let result =
            classifier.classify("Team meeting tomorrow at 2pm", 1, Some(CaptureKind::Task));

        assert_eq!(result.kind, CaptureKind::Task);
        assert!(result.has_clock_time, "signals are still computed under a forced kind");
    }

    #[test]
    fn clock_time_with_candidates_yields_event() {
        let classifier = KindClassifier::new();

        let result = classifier.classify("Dentist tomorrow at 2pm", 1, None);

        assert_eq!(result.kind, CaptureKind::Event);
    }

    #[test]
    fn task_keywords_without_candidates_yield_task() {
        let classifier = KindClassifier::new();

        let result = classifier.classify("Submit project report", 0, None);

        assert_eq!(result.kind, CaptureKind::Task);
        assert!(result.task_score >= 1);
    }

    #[test]
    fn tied_scores_without_candidates_yield_task() {
        let classifier = KindClassifier::new();

        // No keywords at all: 0 == 0, no candidates, branch 3 applies
        let result = classifier.classify("Buy groceries today", 0, None);

        assert_eq!(result.kind, CaptureKind::Task);
    }

    #[test]
    fn tied_scores_with_candidates_and_no_clock_yield_event() {
        let classifier = KindClassifier::new();

        // No keywords, one date-only candidate, no explicit time: branch 5
        let result = classifier.classify("Dentist on Friday", 1, None);

        assert_eq!(result.kind, CaptureKind::Event);
    }

    #[test]
    fn higher_task_score_wins_with_candidates_but_no_clock_time() {
        let classifier = KindClassifier::new();

        let result = classifier.classify("Submit and publish the draft by Friday", 1, None);

        assert_eq!(result.kind, CaptureKind::Task);
        assert!(result.task_score > result.event_score);
    }

    #[test]
    fn review_contributes_to_both_scores() {
        let classifier = KindClassifier::new();

        let result = classifier.classify("review", 0, None);

        assert_eq!(result.event_score, 1);
        assert_eq!(result.task_score, 1);
        // Tie with no candidates resolves to task
        assert_eq!(result.kind, CaptureKind::Task);
    }

    #[test]
    fn event_keywords_with_candidates_yield_event() {
        let classifier = KindClassifier::new();

        let result = classifier.classify("Sprint retro with the teams on Thursday", 1, None);

        assert_eq!(result.kind, CaptureKind::Event);
        assert!(result.event_score > result.task_score);
    }
}
