//! Difficulty curve
//!
//! Everything that depends on the level number is derived here and
//! recomputed whenever the level changes.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LEVEL_IMAGE;

/// Derived per-level parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    pub level: u32,
    /// One defender per level, no upper bound
    pub defender_count: u32,
    /// Ball speed cap in pixels per tick
    pub max_speed: f32,
}

impl LevelParams {
    /// Parameters for `level` (levels start at 1; 0 is treated as 1)
    pub fn for_level(level: u32) -> Self {
        let level = level.max(1);
        Self {
            level,
            defender_count: level,
            max_speed: velocity_base(level) as f32 / 2.0,
        }
    }

    /// Level badge to show; artwork stops at level 6
    pub fn display_level(&self) -> u32 {
        self.level.min(MAX_LEVEL_IMAGE)
    }
}

/// Pixels per key press under step movement (no momentum)
#[inline]
pub fn velocity_base(level: u32) -> u32 {
    4 * level + 20
}
