//! Mini Soccer - dribble past the defenders and score
//!
//! Core modules:
//! - `sim`: Per-frame simulation (ball physics, defenders, collisions, scoring)
//! - `game`: Run driver tying menus, simulation and persistence together
//! - `ui`: Start menu, game-over menu and the text level prompt
//! - `persistence`: Key/value stores (file, memory, browser LocalStorage)
//! - `platform`: Key events, frame pacing and the browser bridge

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Game, Screen};
pub use highscores::HighScore;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playing field (window) size in pixels
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 1000.0;

    /// Ball sprite box
    pub const BALL_SIZE: f32 = 50.0;
    /// Where the ball starts a run and returns after a tackle or goal
    pub const BALL_SPAWN: Vec2 = Vec2::new(500.0, 900.0);
    /// Velocity added per held arrow key per tick
    pub const BALL_ACCELERATION: f32 = 1.0;
    /// Velocity multiplier applied every tick
    pub const BALL_FRICTION: f32 = 0.90;
    /// Hard walls for the ball center
    pub const BALL_MIN_X: f32 = 100.0;
    pub const BALL_MAX_X: f32 = 900.0;
    pub const BALL_MIN_Y: f32 = 150.0;
    pub const BALL_MAX_Y: f32 = 950.0;

    /// Defender sprite box
    pub const DEFENDER_SIZE: f32 = 150.0;
    pub const DEFENDER_START_X: f32 = 400.0;
    /// Vertical spacing between consecutive ranks
    pub const DEFENDER_SPACING: f32 = 150.0;
    pub const DEFENDER_FIRST_Y: f32 = 25.0;
    /// Ranks placed below this line are off the field
    pub const DEFENDER_ROW_LIMIT: f32 = 900.0;
    /// Bounce bounds
    pub const DEFENDER_MIN_X: f32 = 150.0;
    pub const DEFENDER_MAX_X: f32 = 850.0;
    pub const DEFENDER_MIN_Y: f32 = 200.0;
    pub const DEFENDER_MAX_Y: f32 = 800.0;
    /// Bobbing amplitude in pixels
    pub const BOB_AMPLITUDE: f32 = 3.0;
    /// Ticks per animation frame
    pub const ANIM_FRAME_TICKS: u64 = 10;
    /// Tilt of the alternate "step" frame in degrees
    pub const STEP_TILT_DEG: f32 = 8.0;
    /// Bounding box of the tilted sprite: 2 * trunc(75 * (cos 8° + sin 8°))
    pub const TILTED_DEFENDER_SIZE: f32 = 168.0;

    /// Goal box
    pub const GOAL_CENTER: Vec2 = Vec2::new(500.0, 100.0);
    pub const GOAL_SIZE: f32 = 200.0;

    /// Dribble assist
    pub const DANGER_RADIUS: f32 = 180.0;
    pub const MAX_ESCAPE_FORCE: f32 = 1.2;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u32 = 3;
    /// Highest level selectable from the start menu
    pub const MAX_START_LEVEL: u32 = 5;
    /// Level images exist up to this level
    pub const MAX_LEVEL_IMAGE: u32 = 6;

    /// Frame rates
    pub const PLAY_FPS: u32 = 60;
    pub const MENU_FPS: u32 = 30;
    /// Blocking pauses (milliseconds)
    pub const LIFE_LOST_PAUSE_MS: u64 = 1000;
    pub const LEVEL_UP_PAUSE_MS: u64 = 800;
}

/// Unit vector pointing from `from` to `to`, plus the distance between them.
/// Returns `None` when the points coincide.
#[inline]
pub fn direction_and_distance(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let dist = delta.length();
    if dist > 0.0 {
        Some((delta / dist, dist))
    } else {
        None
    }
}
