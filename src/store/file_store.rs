use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::models::Alert;

use super::AlertStore;

/// Stores the alert collection as one pretty-printed JSON array on disk.
///
/// Read policy: a missing file means an empty collection, and a file that
/// cannot be read or parsed is logged and also treated as empty, so the
/// read path stays available even when the file is damaged. Write failures
/// are never swallowed; they surface as [`StorageError`].
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlertStore for FileStore {
    fn load(&self) -> Vec<Alert> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("could not read alerts file {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::warn!(
                    "alerts file {} is not a valid alert collection, treating as empty: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, alerts: &[Alert]) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let json = serde_json::to_string_pretty(alerts)?;

        // Write a sibling file first and rename it over the target, so a
        // failed write never leaves a truncated collection behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}
