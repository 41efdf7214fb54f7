//! Flat JSON file holding the array of user records.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use banklite_ledger::User;

use super::{StoreError, UserPersistence};

/// Pretty-printed JSON array on disk.
///
/// Saves go through a temp file in the same directory that is then renamed
/// over the target, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl UserPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<User>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "user file not found; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if data.trim().is_empty() {
            tracing::warn!(path = %self.path.display(), "user file is empty; starting empty");
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, users: &[User]) -> Result<(), StoreError> {
        let dir = self.dir();
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;

        serde_json::to_writer_pretty(&mut tmp, users)?;
        tmp.flush().map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;

        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), users = users.len(), "user file written");
        Ok(())
    }
}
