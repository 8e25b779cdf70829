use translens_types::{CanonicalTranscript, IdSource};

use crate::Result;
use crate::analytics::AnalyticsNormalizer;
use crate::chat::ChatNormalizer;

/// Output of one normalization pass: the canonical transcript plus the
/// file name it should be persisted under.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedArtifact {
    pub file_name: String,
    pub transcript: CanonicalTranscript,
}

/// Conversion of one raw source record into the canonical shape
///
/// Responsibilities:
/// - Validate the source schema at the boundary (missing fields are a
///   per-record `MalformedRecord`, not a fault)
/// - Apply role normalization exactly once
/// - Derive the output file name
pub trait TranscriptNormalizer: Send + Sync {
    /// Unique normalizer ID (e.g., "chat", "analytics")
    fn id(&self) -> &'static str;

    /// Convert a raw JSON record into a canonical transcript artifact
    fn normalize(&self, raw: &str, ids: &mut IdSource) -> Result<NormalizedArtifact>;
}

/// Look up a normalizer by name
pub fn for_name(name: &str) -> Option<Box<dyn TranscriptNormalizer>> {
    match name {
        "chat" => Some(Box::new(ChatNormalizer)),
        "analytics" => Some(Box::new(AnalyticsNormalizer)),
        _ => None,
    }
}

/// Names accepted by [`for_name`]
pub fn normalizer_names() -> &'static [&'static str] {
    &["chat", "analytics"]
}
