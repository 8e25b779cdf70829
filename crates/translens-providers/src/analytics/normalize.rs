use std::collections::HashMap;

use chrono::Utc;
use translens_types::{
    CanonicalTranscript, IdSource, Participant, ParticipantRole, TranscriptEntry,
    analysis_file_name,
};

use crate::analytics::schema::AnalyticsRecord;
use crate::traits::{NormalizedArtifact, TranscriptNormalizer};
use crate::{Error, Result};

/// Converts a raw call-analytics record into the canonical shape,
/// synthesizing the contact id and the participant-role → id mapping.
pub struct AnalyticsNormalizer;

impl TranscriptNormalizer for AnalyticsNormalizer {
    fn id(&self) -> &'static str {
        "analytics"
    }

    fn normalize(&self, raw: &str, ids: &mut IdSource) -> Result<NormalizedArtifact> {
        let record: AnalyticsRecord = serde_json::from_str(raw)?;
        normalize_analytics_record(record, ids)
    }
}

fn normalize_analytics_record(
    record: AnalyticsRecord,
    ids: &mut IdSource,
) -> Result<NormalizedArtifact> {
    // Analytics sources carry no reusable contact identifier; every run
    // synthesizes a fresh one.
    let contact = ids.contact_id();

    // Unlike chat, the source content metadata is passed through. The
    // redaction types default to none only when absent from the source;
    // the schema's serde default covers that.
    let mut transcript =
        CanonicalTranscript::new(contact.value.clone(), record.content_metadata);

    let mut role_to_id: HashMap<ParticipantRole, u32> = HashMap::new();

    for (index, declared) in record.participants.into_iter().enumerate() {
        let participant_id = index as u32 + 1;
        role_to_id.insert(declared.participant_role.clone(), participant_id);
        transcript.add_participant(Participant {
            participant_id: participant_id.into(),
            participant_role: declared.participant_role,
        });
    }

    for turn in record.transcript {
        let participant_id = *role_to_id
            .get(&turn.participant_role)
            .ok_or_else(|| Error::UnresolvedRole(turn.participant_role.to_string()))?;

        transcript.push_entry(TranscriptEntry {
            participant_id: participant_id.into(),
            id: turn.id.unwrap_or_else(|| ids.entry_id()),
            content: turn.content,
        });
    }

    // No per-turn timestamp exists in this source format; the name is
    // always current date plus a random time of day.
    let file_name = analysis_file_name(
        &contact.prefix,
        &Utc::now().date_naive().to_string(),
        &ids.time_of_day(),
    );

    Ok(NormalizedArtifact {
        file_name,
        transcript,
    })
}
