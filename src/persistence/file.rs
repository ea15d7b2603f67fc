//! Native best score file
//!
//! Stored as a small JSON document, written through a temp file and renamed
//! into place so a crash mid-write never leaves a truncated file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::{BestScoreStore, PersistenceError};

/// On-disk document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// Best score kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    const FILE_NAME: &'static str = "best_score.json";

    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory
    pub fn in_config_dir() -> Result<Self, PersistenceError> {
        let dirs = ProjectDirs::from("", "", "sky-gap").ok_or(PersistenceError::Unavailable)?;
        let dir = dirs.config_dir();
        fs::create_dir_all(dir)?;
        Ok(Self::new(dir.join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<u32, PersistenceError> {
        let json = fs::read_to_string(&self.path)?;
        let file: BestScoreFile = serde_json::from_str(&json)?;
        Ok(file.best_score)
    }
}

impl BestScoreStore for FileStore {
    fn get(&self) -> Option<u32> {
        match self.read() {
            Ok(score) => Some(score),
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Ignoring unreadable best score at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, score: u32) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&BestScoreFile { best_score: score })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Best score saved ({})", score);
        Ok(())
    }
}
