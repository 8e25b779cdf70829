// Error types
pub mod error;

// Normalizer trait and registry (public API)
pub mod traits;

// Source-format implementations
pub mod analytics;
pub mod chat;

pub use analytics::AnalyticsNormalizer;
pub use chat::ChatNormalizer;
pub use error::{Error, Result};
pub use traits::{NormalizedArtifact, TranscriptNormalizer, for_name, normalizer_names};
