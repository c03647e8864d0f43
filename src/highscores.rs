//! Best score across runs
//!
//! Stored as `{"high_score": N}`. A missing or corrupt record counts as 0;
//! a failed write is logged and otherwise ignored.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, Store};

/// Persisted best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    #[serde(default)]
    pub high_score: u32,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highscore";

    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }

    /// Load from the store, falling back to 0
    pub fn load(store: &dyn Store) -> Self {
        match persistence::load_json::<HighScore>(store, Self::STORAGE_KEY) {
            Ok(Some(record)) => {
                log::info!("Loaded high score {}", record.high_score);
                record
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score: {e}");
                Self::default()
            }
        }
    }

    /// Save to the store; failures are not fatal
    pub fn save(&self, store: &mut dyn Store) {
        match persistence::save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("High score {} saved", self.high_score),
            Err(e) => log::warn!("Could not save high score: {e}"),
        }
    }
}
