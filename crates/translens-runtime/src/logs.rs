use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use translens_engine::LogFetcher;
use walkdir::WalkDir;

/// File-backed log group: one JSONL file, or a directory of
/// `.jsonl`/`.log` files, of entries
/// `{"timestamp": <epoch_ms>, "message": "<payload>"}`.
///
/// Implements the window search the fusion engine consumes: entries
/// whose timestamp falls inside the bounds (inclusive) and whose message
/// contains the search key, ordered oldest to newest. Lines that are not
/// valid log entries are ignored.
pub struct FsLogStore {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct LogLine {
    timestamp: i64,
    message: String,
}

impl FsLogStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn files(&self) -> Vec<PathBuf> {
        if !self.path.is_dir() {
            return vec![self.path.clone()];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("jsonl") | Some("log")
                )
            })
            .collect();
        files.sort();
        files
    }
}

impl LogFetcher for FsLogStore {
    fn fetch(
        &self,
        search_key: &str,
        start_epoch_ms: i64,
        end_epoch_ms: i64,
    ) -> anyhow::Result<Vec<String>> {
        let mut hits: Vec<(i64, String)> = Vec::new();

        for file in self.files() {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading log group file {}", file.display()))?;

            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let Ok(entry) = serde_json::from_str::<LogLine>(line) else {
                    continue;
                };
                if entry.timestamp < start_epoch_ms || entry.timestamp > end_epoch_ms {
                    continue;
                }
                if !entry.message.contains(search_key) {
                    continue;
                }
                hits.push((entry.timestamp, entry.message));
            }
        }

        // Stable sort keeps same-instant entries in file order.
        hits.sort_by_key(|(timestamp, _)| *timestamp);
        Ok(hits.into_iter().map(|(_, message)| message).collect())
    }
}
