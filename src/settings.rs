//! Player preferences
//!
//! Persisted separately from the high score, through the same store.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_START_LEVEL;
use crate::persistence::{self, Store};
use crate::sim::RosterPolicy;

/// Volume change per menu key press
pub const VOLUME_STEP: f32 = 0.1;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Level preselected in the start menu
    pub starting_level: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Gameplay ===
    /// Whether ranks below the field line are spawned
    pub roster_policy: RosterPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_level: 1,
            master_volume: 0.8,
            muted: false,
            roster_policy: RosterPolicy::OnFieldOnly,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "settings";

    /// Nudge master volume, staying within 0..=1
    pub fn adjust_volume(&mut self, delta: f32) {
        let stepped = ((self.master_volume + delta) * 10.0).round() / 10.0;
        self.master_volume = stepped.clamp(0.0, 1.0);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Effective master gain (0 when muted)
    pub fn master_gain(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Pull out-of-range values back into range
    pub fn sanitized(mut self) -> Self {
        self.starting_level = self.starting_level.clamp(1, MAX_START_LEVEL);
        if !self.master_volume.is_finite() {
            self.master_volume = Self::default().master_volume;
        }
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self
    }

    /// Load settings, using defaults when missing or unreadable
    pub fn load(store: &dyn Store) -> Self {
        match persistence::load_json::<Settings>(store, Self::STORAGE_KEY) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings.sanitized()
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {e}");
                Self::default()
            }
        }
    }

    /// Save settings; failures are not fatal
    pub fn save(&self, store: &mut dyn Store) {
        match persistence::save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::debug!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {e}"),
        }
    }
}
