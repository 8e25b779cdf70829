use serde::Deserialize;
use translens_types::{ParticipantId, ParticipantRole};

/// Raw chat-transcript record as stored by the contact platform.
///
/// A record interleaves plain-text utterances with event markers
/// (participant joined/left, typing, ...). Only the fields the
/// normalizer reads are modeled; everything else is ignored.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ChatRecord {
    pub contact_id: String,
    pub transcript: Vec<ChatTurn>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ChatTurn {
    pub content_type: String,
    pub absolute_time: String,
    /// Absent on some event markers; required once a turn is retained
    #[serde(default)]
    pub participant_id: Option<ParticipantId>,
    #[serde(default)]
    pub participant_role: Option<ParticipantRole>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}
