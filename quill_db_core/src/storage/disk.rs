use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DbError, DbResult};
use crate::storage::engine::BlobStore;

/// Single-file blob store. `write_all` truncates and rewrites the file in
/// place; there is no rename or journal, so a crash mid-write can leave a
/// torn file.
#[derive(Debug, Clone)]
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

impl BlobStore for FileStore {
    fn read_all(&self) -> DbResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DbError::Storage(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> DbResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}
