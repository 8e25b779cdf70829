use chrono::Utc;
use translens_types::{
    CanonicalTranscript, ContentMetadata, IdSource, Participant, TranscriptEntry,
    analysis_file_name, split_absolute_time,
};

use crate::chat::schema::{ChatRecord, ChatTurn};
use crate::traits::{NormalizedArtifact, TranscriptNormalizer};
use crate::{Error, Result};

/// Content type of the turns that enter the canonical transcript. Event
/// markers and attachments are dropped silently: only plain-text
/// utterances are conversation content.
const PLAIN_TEXT: &str = "text/plain";

/// Converts a raw chat-transcript record into the canonical shape.
pub struct ChatNormalizer;

impl TranscriptNormalizer for ChatNormalizer {
    fn id(&self) -> &'static str {
        "chat"
    }

    fn normalize(&self, raw: &str, ids: &mut IdSource) -> Result<NormalizedArtifact> {
        let record: ChatRecord = serde_json::from_str(raw)?;
        normalize_chat_record(record, ids)
    }
}

fn normalize_chat_record(record: ChatRecord, ids: &mut IdSource) -> Result<NormalizedArtifact> {
    // Chat sources carry no redaction info, so the metadata is always the
    // default (Raw output, no redaction types), never passed through.
    let mut transcript =
        CanonicalTranscript::new(record.contact_id.clone(), ContentMetadata::default());

    let mut first_absolute_time: Option<String> = None;

    for turn in record.transcript {
        if turn.content_type != PLAIN_TEXT {
            continue;
        }

        let ChatTurn {
            absolute_time,
            participant_id,
            participant_role,
            content,
            id,
            ..
        } = turn;

        let participant_id =
            participant_id.ok_or_else(|| malformed("chat turn missing ParticipantId"))?;
        let role = participant_role
            .ok_or_else(|| malformed("chat turn missing ParticipantRole"))?
            .normalized();
        let content = content.ok_or_else(|| malformed("chat turn missing Content"))?;
        let id = id.unwrap_or_else(|| ids.entry_id());

        if first_absolute_time.is_none() {
            first_absolute_time = Some(absolute_time);
        }

        transcript.push_entry(TranscriptEntry {
            participant_id: participant_id.clone(),
            id,
            content,
        });
        transcript.add_participant(Participant {
            participant_id,
            participant_role: role,
        });
    }

    let file_name = match &first_absolute_time {
        Some(absolute_time) => {
            let (date, time) = split_absolute_time(absolute_time);
            analysis_file_name(record.contact_id.as_str(), date, time)
        }
        // No retained turns: fall back to a plausible, collision-resistant
        // name so empty conversations still produce an output.
        None => analysis_file_name(
            record.contact_id.as_str(),
            &Utc::now().date_naive().to_string(),
            &ids.time_of_day(),
        ),
    };

    Ok(NormalizedArtifact {
        file_name,
        transcript,
    })
}

fn malformed(msg: &str) -> Error {
    Error::MalformedRecord(msg.to_string())
}
