//! Directory-backed store: one JSON file per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::{KeyValueStore, StoreError};

/// Store keeping each key in `<dir>/<key>.json`.
///
/// The directory is created on first write. Writes go to a temporary file
/// that is then renamed over the target, so a crash never leaves a
/// half-written value behind.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Creates a store rooted at `dir`. Nothing is touched until a write.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key to its file, rejecting keys that could escape the directory.
    #[track_caller]
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::new(format!("Invalid key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for DirStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => {
                debug!(bytes = value.len(), "Value read");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Key not set");
                Ok(None)
            }
            Err(e) => Err(StoreError::new(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self, value), fields(dir = %self.dir.display(), bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            StoreError::new(format!(
                "Failed to create '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .map_err(|e| StoreError::new(format!("Failed to write '{}': {}", tmp.display(), e)))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(StoreError::new(format!(
                "Failed to replace '{}': {}",
                path.display(),
                e
            )));
        }

        debug!("Value written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_like_keys() {
        let store = DirStore::new("unused");
        for key in ["", "../moves", "a/b", "with space", "dot.json"] {
            assert!(store.get(key).is_err(), "key {key:?} accepted");
        }
    }

    #[test]
    fn test_key_maps_to_json_file() {
        let store = DirStore::new("state");
        let path = store.path_for("moves").expect("valid key");
        assert_eq!(path, Path::new("state").join("moves.json"));
    }
}
