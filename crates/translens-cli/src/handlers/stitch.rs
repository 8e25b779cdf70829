use crate::observer::ConsoleObserver;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use translens_runtime::{FsLogStore, FsObjectStore, StoreProfile, run_stitch};
use translens_types::IdSource;

pub fn handle(
    source: &Path,
    log_group: &Path,
    profile: &StoreProfile,
    page_size: usize,
    ids: &mut IdSource,
) -> Result<()> {
    println!(
        "Stitching transcripts in {} against log group {} (region {})",
        source.display(),
        log_group.display(),
        profile.region
    );

    let store = FsObjectStore::open(source).with_page_size(page_size);
    let fetcher = FsLogStore::open(log_group);
    let mut observer = ConsoleObserver;

    let report = run_stitch(&store, &fetcher, ids, &mut observer)?;

    println!(
        "{} Successfully stitched [{}/{}] keys",
        "[COMPLETE]".green(),
        report.matched,
        report.processed
    );
    if report.skipped > 0 {
        println!("Skipped [{}] keys; see warnings above", report.skipped);
    }
    Ok(())
}
