//! Domain types and models

pub mod capture;
pub mod temporal;

// Re-export capture and temporal types for convenience
pub use capture::{
    Attendee, Capture, CaptureDetails, CaptureKind, ParseDiagnostics, ParseRequest, ParseResult,
    Priority, SourceContext,
};
pub use temporal::{ResolvedSpan, TemporalCandidate, TemporalComponents};
