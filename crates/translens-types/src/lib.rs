pub mod ids;
pub mod naming;
pub mod transcript;

pub use ids::{IdSource, SynthContactId};
pub use naming::{analysis_file_name, parse_file_timestamp, split_absolute_time, timestamp_slice};
pub use transcript::{
    CANONICAL_VERSION, CanonicalTranscript, ContentMetadata, ContentOutput, CustomerMetadata,
    Participant, ParticipantId, ParticipantRole, TranscriptEntry,
};
