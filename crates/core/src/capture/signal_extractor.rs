//! Signal extraction from selection text
//!
//! Stateless, pure extraction routines for attendee emails, location
//! phrases, and priority keywords. Extraction is independent of the chosen
//! capture kind and runs once per parse over the full text.

use capgrab_domain::{Attendee, Priority};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Room / hall identifiers ("Room 4B", "rm. 201", "Hall C")
static ROOM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b((?:room|rm\.?|hall|auditorium)\s+[A-Za-z0-9][A-Za-z0-9.-]*)").unwrap()
});

/// Conferencing join links with an explicit URL
static CONFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(https?://(?:[a-z0-9.-]+\.)?(?:zoom\.us|meet\.google\.com|teams\.microsoft\.com|webex\.com)/[^\s<>"']+)"#,
    )
    .unwrap()
});

/// Generic "at <Place>" fallback; requires a capitalized place name so that
/// phrases like "at 2pm" or "at lunch" do not become locations
static AT_PLACE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[aA]t\s+((?:the\s+)?[A-Z][\w&'.-]*(?:\s+[A-Z][\w&'.-]*)*)").unwrap()
});

/// Default keyword sets for priority extraction, checked in priority order.
const HIGH_PRIORITY_KEYWORDS: [&str; 5] = ["urgent", "asap", "priority", "important", "critical"];
const MEDIUM_PRIORITY_KEYWORDS: [&str; 4] = ["soon", "follow-up", "remind", "next"];
const LOW_PRIORITY_KEYWORDS: [&str; 3] = ["whenever", "sometime", "later"];

/// Extracts attendee, location, and priority signals from selection text
pub struct SignalExtractor {
    high_keywords: Vec<String>,
    medium_keywords: Vec<String>,
    low_keywords: Vec<String>,
}

impl SignalExtractor {
    /// Create an extractor with the default priority keyword sets.
    pub fn new() -> Self {
        Self {
            high_keywords: HIGH_PRIORITY_KEYWORDS.iter().map(|s| (*s).to_string()).collect(),
            medium_keywords: MEDIUM_PRIORITY_KEYWORDS.iter().map(|s| (*s).to_string()).collect(),
            low_keywords: LOW_PRIORITY_KEYWORDS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Extract attendees from email-shaped substrings.
    ///
    /// Addresses are lowercased and deduplicated case-insensitively,
    /// preserving first-seen order. Display names are never filled on the
    /// local path.
    pub fn extract_attendees(&self, text: &str) -> Vec<Attendee> {
        let mut seen = std::collections::HashSet::new();
        let mut attendees = Vec::new();

        for m in EMAIL_PATTERN.find_iter(text) {
            let email = m.as_str().to_lowercase();
            if seen.insert(email.clone()) {
                attendees.push(Attendee { email, display_name: None });
            }
        }

        attendees
    }

    /// Extract a location phrase.
    ///
    /// Matchers run in specificity order: room/hall identifiers, then
    /// conferencing join URLs, then the generic "at <Place>" fallback. The
    /// first matcher that fires wins and its most specific captured group is
    /// returned.
    pub fn extract_location(&self, text: &str) -> Option<String> {
        if let Some(caps) = ROOM_PATTERN.captures(text) {
            return caps.get(1).map(|m| m.as_str().trim().to_string());
        }

        if let Some(caps) = CONFERENCE_PATTERN.captures(text) {
            return caps.get(1).map(|m| m.as_str().trim_end_matches(['.', ',']).to_string());
        }

        if let Some(caps) = AT_PLACE_PATTERN.captures(text) {
            return caps.get(1).map(|m| m.as_str().trim().to_string());
        }

        None
    }

    /// Extract a task priority from keyword membership.
    ///
    /// Sets are checked high, then medium, then low; the first set with a
    /// member present in the text wins.
    pub fn extract_priority(&self, text: &str) -> Option<Priority> {
        let lower = text.to_lowercase();

        if self.high_keywords.iter().any(|k| lower.contains(k.as_str())) {
            return Some(Priority::High);
        }
        if self.medium_keywords.iter().any(|k| lower.contains(k.as_str())) {
            return Some(Priority::Medium);
        }
        if self.low_keywords.iter().any(|k| lower.contains(k.as_str())) {
            return Some(Priority::Low);
        }

        None
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_lowercases_attendees() {
        let extractor = SignalExtractor::new();

        let attendees =
            extractor.extract_attendees("Invite John.Doe@Example.com and jane@example.com");

        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].email, "john.doe@example.com");
        assert_eq!(attendees[1].email, "jane@example.com");
    }

    #[test]
    fn deduplicates_attendees_case_insensitively() {
        let extractor = SignalExtractor::new();

        let attendees =
            extractor.extract_attendees("ping john@example.com, JOHN@EXAMPLE.COM again");

        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].email, "john@example.com");
    }

    #[test]
    fn no_emails_yields_empty_list() {
        let extractor = SignalExtractor::new();

        assert!(extractor.extract_attendees("no addresses here").is_empty());
    }

    #[test]
    fn room_identifier_wins_over_generic_at() {
        let extractor = SignalExtractor::new();

        let location = extractor.extract_location("Standup at Headquarters in Room 4B");

        assert_eq!(location.as_deref(), Some("Room 4B"));
    }

    #[test]
    fn conference_link_is_extracted() {
        let extractor = SignalExtractor::new();

        let location = extractor.extract_location("Join: https://zoom.us/j/123456789 at 3pm");

        assert_eq!(location.as_deref(), Some("https://zoom.us/j/123456789"));
    }

    #[test]
    fn generic_at_place_fallback() {
        let extractor = SignalExtractor::new();

        let location = extractor.extract_location("Lunch at Blue Bottle Cafe tomorrow");

        assert_eq!(location.as_deref(), Some("Blue Bottle Cafe"));
    }

    #[test]
    fn at_clock_time_is_not_a_location() {
        let extractor = SignalExtractor::new();

        assert_eq!(extractor.extract_location("Team meeting tomorrow at 2pm"), None);
    }

    #[test]
    fn urgent_maps_to_high_priority() {
        let extractor = SignalExtractor::new();

        assert_eq!(
            extractor.extract_priority("URGENT: Review PR by end of week"),
            Some(Priority::High)
        );
    }

    #[test]
    fn high_set_wins_over_medium_set() {
        let extractor = SignalExtractor::new();

        // "remind" (medium) and "critical" (high) both present
        assert_eq!(
            extractor.extract_priority("remind me about the critical fix"),
            Some(Priority::High)
        );
    }

    #[test]
    fn low_priority_keywords() {
        let extractor = SignalExtractor::new();

        assert_eq!(extractor.extract_priority("clean the garage sometime"), Some(Priority::Low));
    }

    #[test]
    fn no_keyword_means_no_priority() {
        let extractor = SignalExtractor::new();

        assert_eq!(extractor.extract_priority("buy groceries"), None);
    }
}
