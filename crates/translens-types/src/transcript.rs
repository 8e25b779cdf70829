use serde::{Deserialize, Serialize};

/// Version literal stamped on every canonical transcript
pub const CANONICAL_VERSION: &str = "1.1.0";

/// Canonical transcript (analysis schema v1.1.0)
///
/// The unified shape every source pipeline converges to. Field order
/// matches the wire format: `ContentMetadata`, `CustomerMetadata`,
/// `Version`, `Transcript`, `Participants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalTranscript {
    pub content_metadata: ContentMetadata,
    pub customer_metadata: CustomerMetadata,
    pub version: String,
    pub transcript: Vec<TranscriptEntry>,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentMetadata {
    #[serde(default)]
    pub output: ContentOutput,

    /// Always serialized, `null` when no redaction was applied
    #[serde(default)]
    pub redaction_types: Option<Vec<String>>,
}

impl Default for ContentMetadata {
    fn default() -> Self {
        Self {
            output: ContentOutput::Raw,
            redaction_types: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentOutput {
    Raw,
    Redacted,
    /// Pass-through for output kinds this tool does not interpret
    #[serde(untagged)]
    Other(String),
}

impl Default for ContentOutput {
    fn default() -> Self {
        ContentOutput::Raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerMetadata {
    pub contact_id: String,
}

/// Participant identifier: string (chat sources), 1-based index
/// (analytics sources), or null when no participant with the required
/// role was registered (accepted on fused entries, not rejected).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantId {
    Text(String),
    Index(u32),
    Unassigned,
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        ParticipantId::Text(value.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        ParticipantId::Text(value)
    }
}

impl From<u32> for ParticipantId {
    fn from(value: u32) -> Self {
        ParticipantId::Index(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantRole {
    #[serde(rename = "AGENT")]
    Agent,
    #[serde(rename = "CUSTOMER")]
    Customer,
    #[serde(rename = "SYSTEM")]
    System,
    /// Pass-through for role values this tool does not interpret
    #[serde(untagged)]
    Other(String),
}

impl ParticipantRole {
    /// Role normalization applied once, at normalization time.
    /// `SYSTEM` utterances belong to the agent side of the conversation;
    /// every other value passes through unchanged.
    pub fn normalized(self) -> Self {
        match self {
            ParticipantRole::System => ParticipantRole::Agent,
            role => role,
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantRole::Agent => f.write_str("AGENT"),
            ParticipantRole::Customer => f.write_str("CUSTOMER"),
            ParticipantRole::System => f.write_str("SYSTEM"),
            ParticipantRole::Other(role) => f.write_str(role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub participant_role: ParticipantRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptEntry {
    pub participant_id: ParticipantId,
    pub id: String,
    pub content: String,
}

impl CanonicalTranscript {
    pub fn new(contact_id: String, content_metadata: ContentMetadata) -> Self {
        Self {
            content_metadata,
            customer_metadata: CustomerMetadata { contact_id },
            version: CANONICAL_VERSION.to_string(),
            transcript: Vec::new(),
            participants: Vec::new(),
        }
    }

    pub fn contact_id(&self) -> &str {
        &self.customer_metadata.contact_id
    }

    /// Register a participant, deduplicating by the full
    /// `(participant_id, participant_role)` pair. Insertion order is
    /// preserved.
    pub fn add_participant(&mut self, participant: Participant) {
        if !self.participants.contains(&participant) {
            self.participants.push(participant);
        }
    }

    /// First participant id registered under the given role, if any.
    pub fn participant_id_for(&self, role: &ParticipantRole) -> Option<ParticipantId> {
        self.participants
            .iter()
            .find(|p| p.participant_role == *role)
            .map(|p| p.participant_id.clone())
    }

    pub fn push_entry(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    /// Insert an entry at the front of the transcript. The fusion engine
    /// relies on this to restore chronological order when it walks fetched
    /// log entries newest-first.
    pub fn prepend_entry(&mut self, entry: TranscriptEntry) {
        self.transcript.insert(0, entry);
    }
}
