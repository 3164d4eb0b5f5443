//! Selection capture domain

pub mod confidence;
pub mod kind_classifier;
pub mod ports;
pub mod service;
pub mod signal_extractor;
pub mod temporal_resolver;

pub use kind_classifier::{Classification, ClassifierConfig, KindClassifier};
pub use ports::TemporalRecognizer;
pub use service::CaptureService;
pub use signal_extractor::SignalExtractor;
pub use temporal_resolver::TemporalResolver;
