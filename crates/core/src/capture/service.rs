//! Capture service - orchestrates extraction, classification, and assembly
//!
//! The single entry point of the engine: takes a `ParseRequest`, runs the
//! signal extractors, the temporal resolver, the kind classifier, and the
//! confidence scorer, and assembles a primary capture plus ranked
//! alternatives, warnings, and diagnostics.
//!
//! The service never raises a hard failure for malformed or nonsensical
//! text; the worst case is a low-confidence task capture with an empty
//! title. The only fatal precondition is an unresolvable timezone in the
//! request, which is a caller-input error.

use std::sync::Arc;

use capgrab_domain::utils::title::render_title;
use capgrab_domain::{
    Attendee, Capture, CaptureConfig, CaptureDetails, CaptureError, CaptureKind, ParseDiagnostics,
    ParseRequest, ParseResult, Priority, ResolvedSpan, Result, SourceContext,
};
use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use super::confidence;
use super::kind_classifier::KindClassifier;
use super::ports::TemporalRecognizer;
use super::signal_extractor::SignalExtractor;
use super::temporal_resolver::TemporalResolver;

/// Recurrence token applied when the matched text mentions "every".
const WEEKLY_RRULE: &str = "FREQ=WEEKLY";

const MULTIPLE_INTERPRETATIONS_WARNING: &str = "Multiple date interpretations detected";
const DOWNGRADED_TO_TASK_WARNING: &str = "Could not detect a date/time. Captured as task.";

/// Maximum number of alternative captures offered per parse.
const MAX_ALTERNATIVES: usize = 2;

/// Shared non-temporal fields for the captures of one parse call.
struct CaptureBase {
    title: String,
    notes: String,
    location: Option<String>,
    attendees: Vec<Attendee>,
    source: SourceContext,
    timezone: String,
    reminder_mins: u32,
}

/// Capture service for converting selected text into structured captures
pub struct CaptureService {
    config: CaptureConfig,
    recognizer: Arc<dyn TemporalRecognizer>,
    resolver: TemporalResolver,
    extractor: SignalExtractor,
    classifier: KindClassifier,
}

impl CaptureService {
    /// Create a new capture service around an external temporal recognizer.
    pub fn new(config: CaptureConfig, recognizer: Arc<dyn TemporalRecognizer>) -> Self {
        let resolver = TemporalResolver::new(&config);
        Self {
            config,
            recognizer,
            resolver,
            extractor: SignalExtractor::new(),
            classifier: KindClassifier::new(),
        }
    }

    /// Parse a selection into a primary capture plus ranked alternatives.
    ///
    /// Each call is an independent, synchronous computation with no shared
    /// mutable state; concurrent calls need no coordination.
    pub fn parse(&self, request: &ParseRequest) -> Result<ParseResult> {
        let tz_name = if request.timezone.is_empty() {
            self.config.fallback_timezone.as_str()
        } else {
            request.timezone.as_str()
        };
        let tz: Tz = tz_name
            .parse()
            .map_err(|_| CaptureError::InvalidTimezone(tz_name.to_string()))?;
        let now = request.now.unwrap_or_else(Utc::now).with_timezone(&tz);
        let text = request.text.trim();

        let base = CaptureBase {
            title: render_title(text),
            notes: format!(
                "From: {} — {}\nQuote: \"{}\"",
                request.page_title, request.url, text
            ),
            location: self.extractor.extract_location(text),
            attendees: self.extractor.extract_attendees(text),
            source: SourceContext {
                url: request.url.clone(),
                page_title: request.page_title.clone(),
            },
            timezone: tz_name.to_string(),
            reminder_mins: self.config.default_reminder_mins,
        };

        let candidates = self.recognizer.recognize(text, now);
        let spans = self.resolver.resolve(&candidates, tz);

        let classification = self.classifier.classify(text, spans.len(), request.forced_kind);

        let result = if classification.kind == CaptureKind::Event && !spans.is_empty() {
            self.build_event_result(&base, &spans, &classification)
        } else {
            let priority = self.extractor.extract_priority(text);
            self.build_task_result(&base, &spans, &classification, priority, now, tz)
        };

        debug!(
            candidates = spans.len(),
            kind = %result.diagnostics.chosen_kind,
            confidence = result.capture.confidence,
            "parsed selection"
        );

        Ok(result)
    }

    /// Build an event result from the ranked spans (spans is non-empty here).
    fn build_event_result(
        &self,
        base: &CaptureBase,
        spans: &[ResolvedSpan],
        classification: &super::kind_classifier::Classification,
    ) -> ParseResult {
        let confidence = confidence::score(
            CaptureKind::Event,
            classification.event_score,
            classification.task_score,
            true,
            true,
        );
        let rrule = weekly_rule(&spans[0].matched_text);

        let event_capture = |span: &ResolvedSpan| {
            Self::assemble(base, confidence, CaptureDetails::Event {
                start: span.start,
                end: span.end,
                all_day: span.all_day,
                rrule: rrule.clone(),
            })
        };

        let capture = event_capture(&spans[0]);
        let alternatives: Vec<Capture> =
            spans.iter().skip(1).take(MAX_ALTERNATIVES).map(event_capture).collect();

        let mut warnings = Vec::new();
        if spans.len() > 1 {
            warnings.push(MULTIPLE_INTERPRETATIONS_WARNING.to_string());
        }

        ParseResult {
            capture,
            alternatives: none_if_empty(alternatives),
            warnings: none_if_empty(warnings),
            diagnostics: ParseDiagnostics {
                temporal_candidates: spans.len(),
                chosen_kind: CaptureKind::Event,
                event_score: classification.event_score,
                task_score: classification.task_score,
            },
        }
    }

    /// Build a task result, either because the classifier chose task or
    /// because an event was desired but no temporal candidate exists.
    fn build_task_result(
        &self,
        base: &CaptureBase,
        spans: &[ResolvedSpan],
        classification: &super::kind_classifier::Classification,
        priority: Option<Priority>,
        now: DateTime<Tz>,
        tz: Tz,
    ) -> ParseResult {
        let downgraded = classification.kind == CaptureKind::Event;
        let confidence = confidence::score(
            CaptureKind::Task,
            classification.event_score,
            classification.task_score,
            false,
            !spans.is_empty(),
        );
        let rrule = spans.first().and_then(|span| weekly_rule(&span.matched_text));

        let task_capture = |span: Option<&ResolvedSpan>| {
            let due = match span {
                Some(span) => self.due_from_span(span, tz),
                None => self.default_due(now),
            };
            Self::assemble(base, confidence, CaptureDetails::Task {
                due: Some(due),
                priority,
                rrule: rrule.clone(),
            })
        };

        let capture = task_capture(spans.first());
        let alternatives: Vec<Capture> = if spans.len() > 1 {
            spans.iter().skip(1).take(MAX_ALTERNATIVES).map(|span| task_capture(Some(span))).collect()
        } else {
            Vec::new()
        };

        let mut warnings = Vec::new();
        if downgraded {
            warnings.push(DOWNGRADED_TO_TASK_WARNING.to_string());
        }

        ParseResult {
            capture,
            alternatives: none_if_empty(alternatives),
            warnings: none_if_empty(warnings),
            diagnostics: ParseDiagnostics {
                temporal_candidates: spans.len(),
                chosen_kind: CaptureKind::Task,
                event_score: classification.event_score,
                task_score: classification.task_score,
            },
        }
    }

    /// Due instant for a resolved span.
    ///
    /// A timed span is due at its start. A date-only span is due at the
    /// configured default due time on that date.
    fn due_from_span(&self, span: &ResolvedSpan, tz: Tz) -> DateTime<FixedOffset> {
        if !span.all_day {
            return span.start;
        }
        let date = span.start.with_timezone(&tz).date_naive();
        self.local_due_time(tz, date).fixed_offset()
    }

    /// Default due time: today at the configured due hour, rolled to the
    /// next day when that time has already passed relative to "now".
    fn default_due(&self, now: DateTime<Tz>) -> DateTime<FixedOffset> {
        let tz = now.timezone();
        let today = self.local_due_time(tz, now.date_naive());
        let due = if today <= now {
            self.local_due_time(tz, now.date_naive() + Duration::days(1))
        } else {
            today
        };
        due.fixed_offset()
    }

    /// The configured due time on a given calendar date, in local terms.
    fn local_due_time(&self, tz: Tz, date: NaiveDate) -> DateTime<Tz> {
        // An out-of-range configured time falls back to midnight.
        let time = NaiveTime::from_hms_opt(
            self.config.default_due_hour,
            self.config.default_due_minute,
            0,
        )
        .unwrap_or(NaiveTime::MIN);

        match tz.from_local_datetime(&date.and_time(time)) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => Utc.from_utc_datetime(&date.and_time(time)).with_timezone(&tz),
        }
    }

    /// Assemble a capture from the shared base and variant details.
    ///
    /// Every capture gets a fresh identifier; the shared fields are cloned
    /// as-is so alternatives differ only in their temporal fields.
    fn assemble(base: &CaptureBase, confidence: f32, details: CaptureDetails) -> Capture {
        Capture {
            id: uuid::Uuid::now_v7().to_string(),
            title: base.title.clone(),
            notes: Some(base.notes.clone()),
            location: base.location.clone(),
            attendees: if base.attendees.is_empty() {
                None
            } else {
                Some(base.attendees.clone())
            },
            source: base.source.clone(),
            timezone: base.timezone.clone(),
            confidence,
            reminder_mins: Some(base.reminder_mins),
            details,
        }
    }
}

/// Weekly recurrence token when the matched recognizer text mentions "every".
fn weekly_rule(matched_text: &str) -> Option<String> {
    if matched_text.to_lowercase().contains("every") {
        Some(WEEKLY_RRULE.to_string())
    } else {
        None
    }
}

fn none_if_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
