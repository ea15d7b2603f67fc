//! Browser LocalStorage best score (WASM only)

use super::{BestScoreStore, PersistenceError, parse_score};

/// Best score under a single LocalStorage key, stored as a decimal string
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "bestScore";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl BestScoreStore for LocalStorageStore {
    fn get(&self) -> Option<u32> {
        let text = Self::storage()?.get_item(Self::STORAGE_KEY).ok().flatten()?;
        let score = parse_score(&text);
        if score.is_none() {
            log::warn!("Ignoring unreadable best score {:?}", text);
        }
        score
    }

    fn set(&mut self, score: u32) -> Result<(), PersistenceError> {
        let storage = Self::storage().ok_or(PersistenceError::Unavailable)?;
        storage
            .set_item(Self::STORAGE_KEY, &score.to_string())
            .map_err(|_| PersistenceError::Unavailable)?;
        log::info!("Best score saved ({})", score);
        Ok(())
    }
}
