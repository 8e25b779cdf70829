use translens_engine::LogFetcher;
use translens_providers::TranscriptNormalizer;
use translens_types::{CanonicalTranscript, IdSource};

use crate::store::ObjectStore;
use crate::{Error, Result};

/// Prefix the stitch run enumerates
pub const STITCH_SOURCE_PREFIX: &str = "Analysis/";
/// Prefix fused artifacts are written under, relative to the original key
pub const STITCH_TARGET_PREFIX: &str = "AnalysisWithLexLogs/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionReport {
    pub processed: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StitchReport {
    pub processed: usize,
    pub matched: usize,
    pub skipped: usize,
}

/// Callbacks surfaced to the operator during a run. Hooks default to
/// no-ops so library consumers and tests run silently.
pub trait RunObserver {
    /// A listing page finished; `matched` is only reported by stitch runs
    fn page_complete(&mut self, _processed: usize, _matched: Option<usize>) {}

    /// A record failed and was skipped; the run continues
    fn record_skipped(&mut self, _key: &str, _err: &Error) {}

    /// A stitch window search came back empty (informational, not an error)
    fn no_match(&mut self, _contact_id: &str) {}
}

pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Enumerate `.json` objects in `source`, normalize each through
/// `normalizer`, and persist the canonical artifact in `target` under
/// its derived file name.
///
/// Per-record failures never abort the enumeration: the record is
/// counted as skipped, reported to the observer, and the run moves on.
pub fn run_conversion(
    source: &dyn ObjectStore,
    target: &dyn ObjectStore,
    normalizer: &dyn TranscriptNormalizer,
    ids: &mut IdSource,
    observer: &mut dyn RunObserver,
) -> Result<ConversionReport> {
    let mut report = ConversionReport::default();
    let mut continuation: Option<String> = None;

    loop {
        let page = source.list("", continuation.as_deref())?;

        for key in &page.keys {
            if !key.ends_with(".json") {
                continue;
            }

            match convert_one(source, target, normalizer, ids, key) {
                Ok(()) => report.processed += 1,
                Err(err) => {
                    report.skipped += 1;
                    observer.record_skipped(key, &err);
                }
            }
        }

        observer.page_complete(report.processed, None);

        match page.continuation {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }

    Ok(report)
}

fn convert_one(
    source: &dyn ObjectStore,
    target: &dyn ObjectStore,
    normalizer: &dyn TranscriptNormalizer,
    ids: &mut IdSource,
    key: &str,
) -> Result<()> {
    let raw = source.get(key)?;
    let artifact = normalizer.normalize(&raw, ids)?;
    let body = serde_json::to_vec(&artifact.transcript)?;
    target.put(&artifact.file_name, &body)?;
    Ok(())
}

/// Enumerate canonical transcripts under `Analysis/`, fuse each with the
/// time-correlated bot logs for its contact, and write the result under
/// `AnalysisWithLexLogs/` in the same store.
///
/// The distinct target prefix matters: fusion is not idempotent, so the
/// source artifacts are never overwritten.
pub fn run_stitch(
    store: &dyn ObjectStore,
    fetcher: &dyn LogFetcher,
    ids: &mut IdSource,
    observer: &mut dyn RunObserver,
) -> Result<StitchReport> {
    let mut report = StitchReport::default();
    let mut continuation: Option<String> = None;

    loop {
        let page = store.list(STITCH_SOURCE_PREFIX, continuation.as_deref())?;

        for key in &page.keys {
            if !key.ends_with(".json") {
                continue;
            }

            match stitch_one(store, fetcher, ids, key) {
                Ok((matched, contact_id)) => {
                    report.processed += 1;
                    if matched {
                        report.matched += 1;
                    } else {
                        observer.no_match(&contact_id);
                    }
                }
                Err(err) => {
                    report.skipped += 1;
                    observer.record_skipped(key, &err);
                }
            }
        }

        observer.page_complete(report.processed, Some(report.matched));

        match page.continuation {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }

    Ok(report)
}

fn stitch_one(
    store: &dyn ObjectStore,
    fetcher: &dyn LogFetcher,
    ids: &mut IdSource,
    key: &str,
) -> Result<(bool, String)> {
    let raw = store.get(key)?;
    let mut transcript: CanonicalTranscript = serde_json::from_str(&raw)?;

    let outcome = translens_engine::fuse(&mut transcript, key, fetcher, ids)?;

    let body = serde_json::to_vec(&transcript)?;
    store.put(&format!("{}{}", STITCH_TARGET_PREFIX, key), &body)?;

    Ok((outcome.matched, transcript.contact_id().to_string()))
}
