use crate::domain::ports::Storage;
use crate::utils::error::{InviteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        // absolute paths replace the base path
        let full_path = self.base_path.join(path);
        fs::read_to_string(&full_path)
            .map_err(|e| InviteError::io(full_path.display().to_string(), e))
    }
}
