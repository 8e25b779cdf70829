use translens_types::{
    CanonicalTranscript, IdSource, ParticipantId, ParticipantRole, TranscriptEntry,
    parse_file_timestamp,
};

use crate::logs::BotLogEntry;
use crate::{Error, Result};

/// Half-width of the log search window around the conversation instant
pub const SEARCH_WINDOW_MS: i64 = 60 * 60 * 1000;

/// Time-windowed search against an external log store
///
/// Responsibilities:
/// - Return raw payload strings whose log entry matches the search key
///   inside `[start_epoch_ms, end_epoch_ms]`
/// - Order the result oldest to newest
/// - Handle its own pagination; an empty result means "no match"
pub trait LogFetcher {
    fn fetch(
        &self,
        search_key: &str,
        start_epoch_ms: i64,
        end_epoch_ms: i64,
    ) -> anyhow::Result<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FusionOutcome {
    /// True iff the window search returned at least one entry, regardless
    /// of whether it carried bot or customer content
    pub matched: bool,

    /// Transcript entries inserted by this run
    pub inserted: usize,

    /// Payloads that were not parseable as bot-conversation logs
    pub skipped_payloads: usize,
}

/// Merge time-correlated bot-conversation log entries into a stored
/// canonical transcript.
///
/// The conversation instant is recovered from the artifact's file name
/// (the span the normalizers put there), the log store is searched for
/// the contact id in a ±1 hour window, and each fetched utterance is
/// prepended to the transcript.
///
/// The fetched sequence arrives oldest to newest. Walking it newest
/// first — and the prompts inside each entry newest first — while always
/// inserting at the front leaves the transcript in chronological order:
/// oldest fetched utterance first, the original first entry immediately
/// after the last inserted one. This holds as long as the fetched window
/// precedes the stored transcript; no overlap resolution is attempted.
///
/// Not idempotent: every inserted entry gets a fresh id, so re-running
/// over an already-fused transcript duplicates content under new ids.
/// Callers write fused output to a distinct location.
pub fn fuse(
    transcript: &mut CanonicalTranscript,
    file_name: &str,
    fetcher: &dyn LogFetcher,
    ids: &mut IdSource,
) -> Result<FusionOutcome> {
    let epoch_ms = parse_file_timestamp(file_name)
        .ok_or_else(|| Error::MalformedTimestamp(file_name.to_string()))?;

    // First registered participant per role wins. A missing role is
    // accepted: the inserted entries carry a null participant id.
    let customer_id = transcript
        .participant_id_for(&ParticipantRole::Customer)
        .unwrap_or(ParticipantId::Unassigned);
    let agent_id = transcript
        .participant_id_for(&ParticipantRole::Agent)
        .unwrap_or(ParticipantId::Unassigned);

    // The bot platform logs under the contact id as its session key.
    let payloads = fetcher
        .fetch(
            transcript.contact_id(),
            epoch_ms - SEARCH_WINDOW_MS,
            epoch_ms + SEARCH_WINDOW_MS,
        )
        .map_err(Error::Fetch)?;

    let mut outcome = FusionOutcome {
        matched: !payloads.is_empty(),
        ..Default::default()
    };

    for payload in payloads.iter().rev() {
        let entry: BotLogEntry = match serde_json::from_str(payload) {
            Ok(entry) => entry,
            Err(_) => {
                outcome.skipped_payloads += 1;
                continue;
            }
        };

        // Within one entry the customer utterance precedes the bot
        // prompts, so the prompts go in first and the utterance lands in
        // front of them.
        if let Some(messages) = &entry.messages {
            for prompt in messages.iter().rev() {
                transcript.prepend_entry(TranscriptEntry {
                    participant_id: agent_id.clone(),
                    id: ids.entry_id(),
                    content: prompt.content.clone(),
                });
                outcome.inserted += 1;
            }
        }
        if let Some(input) = &entry.input_transcript {
            transcript.prepend_entry(TranscriptEntry {
                participant_id: customer_id.clone(),
                id: ids.entry_id(),
                content: input.clone(),
            });
            outcome.inserted += 1;
        }
    }

    Ok(outcome)
}
