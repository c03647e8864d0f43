//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or storage:
//! - One call to `tick` per frame
//! - Events come back as values; callers decide what to persist or play
//! - Defenders iterate in rank order

pub mod ball;
pub mod collision;
pub mod defender;
pub mod level;
pub mod state;
pub mod tick;

pub use ball::{Ball, Direction, HeldKeys};
pub use collision::{Aabb, escape_impulse, in_goal, nearest_defender, tackled_by};
pub use defender::{Defender, RosterPolicy, drift_x, find_y_pos, spawn, spawn_roster};
pub use level::LevelParams;
pub use state::{DefenderSprite, GameEvent, GamePhase, Hud, RenderFrame, SessionState};
pub use tick::{TickInput, autopilot, tick};
