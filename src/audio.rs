//! Sound cues
//!
//! The game does not play audio itself. Frontends drain `Cue`s from the
//! run driver and play the matching sample at the given gain.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball in the net
    Goal,
    /// Ball taken by a defender
    Tackle,
    /// Last life gone
    GameOver,
    /// Looping crowd noise while a run is on
    CrowdAmbience,
}

impl SoundCue {
    /// Mix level before master volume
    pub fn base_gain(self) -> f32 {
        match self {
            SoundCue::Goal => 0.8,
            SoundCue::Tackle => 0.7,
            SoundCue::GameOver => 0.7,
            SoundCue::CrowdAmbience => 0.3,
        }
    }

    pub fn looped(self) -> bool {
        matches!(self, SoundCue::CrowdAmbience)
    }
}

/// Sounds triggered by a simulation event
pub fn cues_for(event: &GameEvent) -> &'static [SoundCue] {
    match event {
        GameEvent::GoalScored { .. } => &[SoundCue::Goal],
        GameEvent::LifeLost { .. } => &[SoundCue::Tackle],
        GameEvent::GameOver { .. } => &[SoundCue::Tackle, SoundCue::GameOver],
        GameEvent::LevelAdvanced { .. } | GameEvent::HighScoreBeaten { .. } => &[],
    }
}

/// A cue ready to play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub sound: SoundCue,
    pub gain: f32,
    pub looped: bool,
}

impl Cue {
    pub fn mixed(sound: SoundCue, settings: &Settings) -> Self {
        Self {
            sound,
            gain: sound.base_gain() * settings.master_gain(),
            looped: sound.looped(),
        }
    }
}
