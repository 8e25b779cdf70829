use serde::Deserialize;

/// One bot-conversation log payload, as stored by the bot platform's
/// conversation logging.
///
/// A payload may carry a set of bot prompts (`messages`), a single
/// customer utterance (`inputTranscript`), both, or neither. Every other
/// field of the log entry is ignored.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BotLogEntry {
    #[serde(default)]
    pub messages: Option<Vec<BotMessage>>,
    #[serde(default)]
    pub input_transcript: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BotMessage {
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let entry: BotLogEntry = serde_json::from_str(
            r#"{"messages": [{"content": "How can I help?"}], "inputTranscript": "hi",
                "sessionId": "abc", "botVersion": "2"}"#,
        )
        .unwrap();

        assert_eq!(entry.messages.unwrap()[0].content, "How can I help?");
        assert_eq!(entry.input_transcript.as_deref(), Some("hi"));
    }

    #[test]
    fn test_payload_without_dialogue_fields() {
        let entry: BotLogEntry =
            serde_json::from_str(r#"{"sessionId": "abc"}"#).unwrap();
        assert!(entry.messages.is_none());
        assert!(entry.input_transcript.is_none());
    }
}
