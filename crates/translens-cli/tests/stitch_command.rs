mod common;

use common::TestFixture;
use predicates::prelude::*;

const ANALYSIS_KEY: &str = "Analysis/c1_analysis_2023-05-01_T10:20:30Z.json";
const FUSED_KEY: &str = "AnalysisWithLexLogs/Analysis/c1_analysis_2023-05-01_T10:20:30Z.json";

// 2023-05-01T10:20:30Z
const EPOCH_MS: i64 = 1_682_936_430_000;

const ANALYSIS_BODY: &str = r#"{
    "ContentMetadata": {"Output": "Raw", "RedactionTypes": null},
    "CustomerMetadata": {"ContactId": "c1"},
    "Version": "1.1.0",
    "Transcript": [
        {"ParticipantId": "cust-1", "Id": "t1", "Content": "Where is my order?"}
    ],
    "Participants": [
        {"ParticipantId": "cust-1", "ParticipantRole": "CUSTOMER"},
        {"ParticipantId": "agent-1", "ParticipantRole": "AGENT"}
    ]
}"#;

fn bot_log_line(offset_ms: i64, payload: &str) -> String {
    format!(
        r#"{{"timestamp": {}, "message": {}}}"#,
        EPOCH_MS + offset_ms,
        serde_json::to_string(payload).unwrap()
    )
}

#[test]
fn test_stitch_fuses_bot_logs_into_the_transcript() {
    let fixture = TestFixture::new();
    fixture.write_source(ANALYSIS_KEY, ANALYSIS_BODY);
    fixture.write_log_lines(&[bot_log_line(
        -30_000,
        r#"{"sessionId": "c1", "inputTranscript": "track order", "messages": [{"content": "Your order ships today."}]}"#,
    )]);

    fixture
        .command()
        .arg("stitch")
        .arg("--source")
        .arg(fixture.source())
        .arg("--log-group")
        .arg(fixture.log_group())
        .arg("--region")
        .arg("eu-west-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully stitched [1/1] keys"));

    // The original artifact is untouched; the fused copy lives under
    // its own prefix.
    assert_eq!(fixture.read_source(ANALYSIS_KEY), ANALYSIS_BODY);

    let fused: serde_json::Value =
        serde_json::from_str(&fixture.read_source(FUSED_KEY)).unwrap();
    let transcript = fused["Transcript"].as_array().unwrap();
    assert_eq!(transcript.len(), 3);

    // Customer utterance first, then the bot reply, then the original
    // transcript.
    assert_eq!(transcript[0]["Content"], "track order");
    assert_eq!(transcript[0]["ParticipantId"], "cust-1");
    assert_eq!(transcript[1]["Content"], "Your order ships today.");
    assert_eq!(transcript[1]["ParticipantId"], "agent-1");
    assert_eq!(transcript[2]["Content"], "Where is my order?");
}

#[test]
fn test_stitch_reports_contacts_without_bot_sessions() {
    let fixture = TestFixture::new();
    fixture.write_source(ANALYSIS_KEY, ANALYSIS_BODY);
    // Entry outside the one-hour search window
    fixture.write_log_lines(&[bot_log_line(
        2 * 3_600_000,
        r#"{"sessionId": "c1", "inputTranscript": "too late"}"#,
    )]);

    fixture
        .command()
        .arg("stitch")
        .arg("--source")
        .arg(fixture.source())
        .arg("--log-group")
        .arg(fixture.log_group())
        .arg("--region")
        .arg("eu-west-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bot session found for contact c1"))
        .stdout(predicate::str::contains("Successfully stitched [0/1] keys"));

    let fused: serde_json::Value =
        serde_json::from_str(&fixture.read_source(FUSED_KEY)).unwrap();
    assert_eq!(fused["Transcript"].as_array().unwrap().len(), 1);
}

#[test]
fn test_stitch_only_touches_the_analysis_prefix() {
    let fixture = TestFixture::new();
    fixture.write_source(ANALYSIS_KEY, ANALYSIS_BODY);
    fixture.write_source(
        "Raw/c1_analysis_2023-05-01_T10:20:30Z.json",
        ANALYSIS_BODY,
    );
    fixture.write_log_lines(&[]);

    fixture
        .command()
        .arg("stitch")
        .arg("--source")
        .arg(fixture.source())
        .arg("--log-group")
        .arg(fixture.log_group())
        .arg("--region")
        .arg("eu-west-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully stitched [0/1] keys"));

    let keys = fixture.source_keys();
    assert!(keys.contains(&FUSED_KEY.to_string()));
    assert!(!keys.iter().any(|key| key.starts_with("AnalysisWithLexLogs/Raw/")));
}
