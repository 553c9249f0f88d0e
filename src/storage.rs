use crate::model::LifeData;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File-backed persistence for the combined store
///
/// The on-disk form is a single TOML document holding the `lists` and
/// `tasks` record arrays. Loading fails soft: a missing, unreadable, or
/// corrupt file yields an empty store rather than an error, so startup
/// never depends on the blob being intact.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the store, falling back to empty on any failure
    pub fn load(&self) -> LifeData {
        if !self.file_path.exists() {
            return LifeData::new();
        }

        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "unreadable data file, starting empty");
                return LifeData::new();
            }
        };

        match toml::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "corrupt data file, starting empty");
                LifeData::new()
            }
        }
    }

    /// Persist the full current store snapshot
    pub fn save(&self, data: &LifeData) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
