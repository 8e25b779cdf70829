use chrono::NaiveDateTime;

/// `YYYY-MM-DD`
pub const DATE_CHARACTERS: usize = 10;
/// `HH:MM:SS`
pub const TIME_CHARACTERS: usize = 8;

/// `YYYY-MM-DD_THH:MM:SS`, the span recoverable from an analysis file name
const STAMP_CHARACTERS: usize = DATE_CHARACTERS + 2 + TIME_CHARACTERS;
const NAME_SUFFIX: &str = "Z.json";
const STAMP_FORMAT: &str = "%Y-%m-%d_T%H:%M:%S";

/// Build the output file name for a canonical transcript:
/// `{contact_id}_analysis_{date}_T{time}Z.json`.
///
/// The fusion engine re-derives the conversation instant from this name,
/// so formatting and parsing live together in this module.
pub fn analysis_file_name(contact_id: &str, date: &str, time: &str) -> String {
    format!("{}_analysis_{}_T{}Z.json", contact_id, date, time)
}

/// Split a source `AbsoluteTime` string (`YYYY-MM-DDTHH:MM:SS...`) into
/// its 10-character date and 8-character time components.
///
/// Strings shorter than the expected span are not an error: the split
/// takes what is available, mirroring the lenient handling of the source
/// format.
pub fn split_absolute_time(absolute_time: &str) -> (&str, &str) {
    let date = safe_slice(absolute_time, 0, DATE_CHARACTERS);
    let time = safe_slice(
        absolute_time,
        DATE_CHARACTERS + 1,
        DATE_CHARACTERS + 1 + TIME_CHARACTERS,
    );
    (date, time)
}

fn safe_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= s.len() {
        return "";
    }
    s.get(start..end.min(s.len())).unwrap_or("")
}

/// Recover the 20-character timestamp span from an analysis file name.
///
/// Returns `None` when the name does not carry the `...Z.json` suffix the
/// normalizers produce, or is too short to hold a full stamp.
pub fn timestamp_slice(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(NAME_SUFFIX)?;
    if stem.len() < STAMP_CHARACTERS {
        return None;
    }
    stem.get(stem.len() - STAMP_CHARACTERS..)
}

/// Parse the conversation instant out of an analysis file name, as epoch
/// milliseconds (UTC).
pub fn parse_file_timestamp(file_name: &str) -> Option<i64> {
    let stamp = timestamp_slice(file_name)?;
    let parsed = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()?;
    Some(parsed.and_utc().timestamp_millis())
}
