//! # CapGrab Domain
//!
//! Business domain types and models for the selection-to-capture engine.
//!
//! This crate contains:
//! - Capture data types (Capture, ParseRequest, ParseResult, etc.)
//! - Temporal candidate types consumed from the external recognizer
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Small string utilities (title truncation)
//!
//! ## Architecture
//! - No dependencies on other CapGrab crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
