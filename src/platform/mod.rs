//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Discrete key events (menus)
//! - Frame pacing and the blocking UI pauses
//! - The browser bridge (`web`, wasm32 only)

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Discrete key press (menus and screens)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Enter
    Confirm,
    /// R on the game-over screen
    Restart,
    /// Q / Esc / window close
    Quit,
    VolumeUp,
    VolumeDown,
    /// M
    ToggleMute,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Key> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Enter" => Some(Key::Confirm),
            "r" | "R" => Some(Key::Restart),
            "q" | "Q" | "Escape" => Some(Key::Quit),
            "+" | "=" => Some(Key::VolumeUp),
            "-" | "_" => Some(Key::VolumeDown),
            "m" | "M" => Some(Key::ToggleMute),
            _ => None,
        }
    }
}

/// Time budget for one frame at `fps`
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

/// Sleeps out the rest of each frame to hold a target rate
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FramePacer {
    last: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FramePacer {
    pub fn new() -> Self {
        Self {
            last: std::time::Instant::now(),
        }
    }

    /// Block until one frame at `fps` has passed since the previous call
    pub fn wait(&mut self, fps: u32) {
        let elapsed = self.last.elapsed();
        let budget = frame_interval(fps);
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.last = std::time::Instant::now();
    }

    /// Stop the whole loop for a fixed pause
    pub fn stall(&mut self, pause: Duration) {
        std::thread::sleep(pause);
        self.last = std::time::Instant::now();
    }
}
