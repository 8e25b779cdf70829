use crate::observer::ConsoleObserver;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use translens_providers::TranscriptNormalizer;
use translens_runtime::{FsObjectStore, StoreProfile, run_conversion};
use translens_types::IdSource;

pub fn handle(
    source: &Path,
    target: &Path,
    normalizer: &dyn TranscriptNormalizer,
    profile: &StoreProfile,
    page_size: usize,
    ids: &mut IdSource,
) -> Result<()> {
    println!(
        "Transforming {} records from {} (region {})",
        normalizer.id(),
        source.display(),
        profile.region
    );

    let source = FsObjectStore::open(source).with_page_size(page_size);
    let target = FsObjectStore::open(target);
    let mut observer = ConsoleObserver;

    let report = run_conversion(&source, &target, normalizer, ids, &mut observer)?;

    println!(
        "{} Successfully transformed [{}] keys",
        "[COMPLETE]".green(),
        report.processed
    );
    if report.skipped > 0 {
        println!("Skipped [{}] keys; see warnings above", report.skipped);
    }
    Ok(())
}
