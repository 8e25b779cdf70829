use serde::Deserialize;
use translens_types::{ContentMetadata, ParticipantRole};

/// Raw call-analytics record.
///
/// Participants are declared by role only (no ids), and transcript turns
/// reference participants by role rather than id. The normalizer
/// synthesizes both the contact id and the numeric participant ids.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AnalyticsRecord {
    pub content_metadata: ContentMetadata,
    pub participants: Vec<DeclaredParticipant>,
    pub transcript: Vec<AnalyticsTurn>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DeclaredParticipant {
    pub participant_role: ParticipantRole,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AnalyticsTurn {
    pub participant_role: ParticipantRole,
    pub content: String,
    #[serde(default)]
    pub id: Option<String>,
}
