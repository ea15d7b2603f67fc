//! Best score persistence
//!
//! A single non-negative integer that outlives the process:
//! - `MemoryStore`: in-process, for tests and as a fallback
//! - `FileStore`: JSON file in the platform config dir (native)
//! - `LocalStorageStore`: browser LocalStorage (WASM)
//!
//! Reads never fail: a missing or corrupt value reads as absent.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("There was a problem reading or writing the save file")]
    Io(#[from] std::io::Error),
    #[error("The stored data is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("No storage is available on this platform")]
    Unavailable,
}

/// Where the best score lives between runs
pub trait BestScoreStore {
    /// Stored best score, `None` if absent or unreadable
    fn get(&self) -> Option<u32>;

    /// Overwrite the stored best score
    fn set(&mut self, score: u32) -> Result<(), PersistenceError>;

    /// Stored best score with absent treated as 0
    fn best(&self) -> u32 {
        self.get().unwrap_or(0)
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn get(&self) -> Option<u32> {
        (**self).get()
    }

    fn set(&mut self, score: u32) -> Result<(), PersistenceError> {
        (**self).set(score)
    }
}

/// In-memory store; counts writes so callers can check when they happen
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a best score
    pub fn with_best(score: u32) -> Self {
        Self {
            value: Some(score),
            writes: 0,
        }
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BestScoreStore for MemoryStore {
    fn get(&self) -> Option<u32> {
        self.value
    }

    fn set(&mut self, score: u32) -> Result<(), PersistenceError> {
        self.value = Some(score);
        self.writes += 1;
        Ok(())
    }
}

/// Parse a stored best score the way a hand-edited value might look.
///
/// Accepts surrounding whitespace; anything negative or non-numeric is absent.
pub fn parse_score(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}
