//! # CapGrab Core
//!
//! Pure business logic for turning a span of user-selected text into a
//! structured calendar-event or task capture.
//!
//! This crate contains:
//! - The temporal resolver (normalizes recognizer candidates into the
//!   request timezone)
//! - Stateless signal extractors (attendees, location, priority)
//! - The event-vs-task kind classifier
//! - The confidence scorer
//! - The capture service that orchestrates them into a `ParseResult`
//!
//! ## Architecture Principles
//! - Only depends on `capgrab-domain`
//! - No network, storage, or UI code
//! - The external natural-language date recognizer sits behind the
//!   [`capture::ports::TemporalRecognizer`] trait
//! - Pure, synchronous-per-call, testable logic

pub mod capture;

// Re-export the main entry points
pub use capture::ports::TemporalRecognizer;
pub use capture::CaptureService;
