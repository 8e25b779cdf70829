use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One page of a key listing. `continuation` restarts the enumeration
/// after the last key of this page; `None` means the listing is
/// exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPage {
    pub keys: Vec<String>,
    pub continuation: Option<String>,
}

/// Blob storage as the drivers consume it: paginated enumeration under a
/// prefix, plus whole-object get/put.
pub trait ObjectStore {
    fn list(&self, prefix: &str, continuation: Option<&str>) -> Result<ObjectPage>;
    fn get(&self, key: &str) -> Result<String>;
    fn put(&self, key: &str, body: &[u8]) -> Result<()>;
}

/// Directory-rooted object store. Keys are `/`-separated paths relative
/// to the root; listing order is stable (sorted) so continuation tokens
/// survive across calls.
pub struct FsObjectStore {
    root: PathBuf,
    page_size: usize,
}

impl FsObjectStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            page_size: 1000,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collect_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        if !self.root.exists() {
            return Ok(keys);
        }

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .expect("walked path is under the root");
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if key.starts_with(prefix) {
                keys.push(key);
            }
        }

        // sort_by_file_name orders per directory level; a full sort keeps
        // the continuation contract independent of directory layout.
        keys.sort();
        Ok(keys)
    }
}

impl ObjectStore for FsObjectStore {
    fn list(&self, prefix: &str, continuation: Option<&str>) -> Result<ObjectPage> {
        let keys = self.collect_keys(prefix)?;

        let start = match continuation {
            Some(token) => keys.partition_point(|key| key.as_str() <= token),
            None => 0,
        };

        let end = (start + self.page_size).min(keys.len());
        let page: Vec<String> = keys[start..end].to_vec();
        let continuation = if end < keys.len() {
            page.last().cloned()
        } else {
            None
        };

        Ok(ObjectPage {
            keys: page,
            continuation,
        })
    }

    fn get(&self, key: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.root.join(key))?)
    }

    fn put(&self, key: &str, body: &[u8]) -> Result<()> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_store(keys: &[&str]) -> (TempDir, FsObjectStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FsObjectStore::open(temp_dir.path());
        for key in keys {
            store.put(key, b"{}").unwrap();
        }
        (temp_dir, store)
    }

    #[test]
    fn test_round_trip() {
        let (_guard, store) = seeded_store(&[]);
        store.put("a/b.json", br#"{"x": 1}"#).unwrap();
        assert_eq!(store.get("a/b.json").unwrap(), r#"{"x": 1}"#);
    }

    #[test]
    fn test_pagination_visits_every_key_once() {
        let (_guard, store) = seeded_store(&["a.json", "b.json", "c.json", "d.json", "e.json"]);
        let store = store.with_page_size(2);

        let mut seen = Vec::new();
        let mut continuation: Option<String> = None;
        let mut pages = 0;
        loop {
            let page = store.list("", continuation.as_deref()).unwrap();
            seen.extend(page.keys);
            pages += 1;
            match page.continuation {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        assert_eq!(pages, 3);
        assert_eq!(seen, vec!["a.json", "b.json", "c.json", "d.json", "e.json"]);
    }

    #[test]
    fn test_prefix_filter() {
        let (_guard, store) = seeded_store(&[
            "Analysis/one.json",
            "Analysis/two.json",
            "Other/three.json",
        ]);

        let page = store.list("Analysis/", None).unwrap();
        assert_eq!(page.keys, vec!["Analysis/one.json", "Analysis/two.json"]);
        assert!(page.continuation.is_none());
    }

    #[test]
    fn test_missing_root_lists_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsObjectStore::open(temp_dir.path().join("absent"));
        let page = store.list("", None).unwrap();
        assert!(page.keys.is_empty());
        assert!(page.continuation.is_none());
    }
}
