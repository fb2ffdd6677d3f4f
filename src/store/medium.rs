//! Durable key-value media backing the history store.
//!
//! A medium maps string keys to string values and outlives the process. The
//! store serializes each history list to JSON and writes it under a fixed key;
//! on startup it reads the same keys back. Reads distinguish "key absent"
//! (`Ok(None)`) from "medium failed" (`Err`).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub trait StorageMedium: Send {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed medium: one file per key, `<dir>/<key>.json`.
///
/// The directory is created on first write. Keys are fixed identifiers chosen
/// by the store, never user input, so no filename sanitization is applied.
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageMedium for FileMedium {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)
    }
}

/// In-memory medium. Clones share the same map, so a second store built over
/// a clone sees everything the first one wrote. Used when persistence is
/// disabled in the config, and in tests to simulate a process restart.
#[derive(Clone, Default)]
pub struct MemoryMedium {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        let entries = self.entries.lock().expect("medium lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().expect("medium lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn scratch_dir(tag: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "promptdeck-medium-{}-{}-{}",
            tag,
            std::process::id(),
            n
        ))
    }

    #[test]
    fn file_medium_round_trip() {
        let dir = scratch_dir("roundtrip");
        let mut medium = FileMedium::new(&dir);
        assert_eq!(medium.read("aiTalkHistory").unwrap(), None);

        medium.write("aiTalkHistory", "[1,2,3]").unwrap();
        assert_eq!(
            medium.read("aiTalkHistory").unwrap().as_deref(),
            Some("[1,2,3]")
        );

        medium.write("aiTalkHistory", "[]").unwrap();
        assert_eq!(medium.read("aiTalkHistory").unwrap().as_deref(), Some("[]"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_medium_keys_are_independent_files() {
        let dir = scratch_dir("keys");
        let mut medium = FileMedium::new(&dir);
        medium.write("a", "1").unwrap();
        medium.write("b", "2").unwrap();
        assert!(dir.join("a.json").exists());
        assert!(dir.join("b.json").exists());
        assert_eq!(medium.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(medium.read("b").unwrap().as_deref(), Some("2"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn memory_medium_clones_share_entries() {
        let mut medium = MemoryMedium::new();
        let other = medium.clone();
        medium.write("k", "v").unwrap();
        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
    }
}
