//! Browser bridge
//!
//! JavaScript owns the canvas, the audio samples and the animation frame
//! callback. Each frame it passes the held arrow keys in and gets a JSON
//! snapshot back.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::Key;
use crate::audio::Cue;
use crate::game::{Game, Screen};
use crate::persistence::LocalStorageStore;
use crate::sim::{GameEvent, HeldKeys, RenderFrame, TickInput};

/// Everything JS needs to draw and play one frame
#[derive(Serialize)]
struct WebFrame {
    screen: &'static str,
    menu_level: u32,
    target_fps: u32,
    frame: RenderFrame,
    events: Vec<GameEvent>,
    cues: Vec<Cue>,
    /// Milliseconds to hold the current picture before the next frame
    stall_ms: u64,
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::StartMenu => "start",
        Screen::Playing => "playing",
        Screen::GameOver => "game_over",
        Screen::Terminated => "terminated",
    }
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        console_error_panic_hook::set_once();
        // Already initialised when the page creates a second game
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Mini Soccer starting...");

        WebGame {
            game: Game::new(LocalStorageStore),
        }
    }

    /// Discrete key press, by DOM `KeyboardEvent.key`
    pub fn key(&mut self, dom_key: &str) {
        if let Some(key) = Key::from_dom_key(dom_key) {
            self.game.handle_key(key);
        }
    }

    /// Advance one frame. `held` is a bitmask: 1 left, 2 right, 4 up, 8 down.
    pub fn frame(&mut self, held: u8, idle: bool) -> String {
        let input = TickInput {
            held: HeldKeys::from_bits(held),
            idle_mode: idle,
        };
        let events = self.game.frame(&input);

        let out = WebFrame {
            screen: screen_name(self.game.screen()),
            menu_level: self.game.menu_level(),
            target_fps: self.game.target_fps(),
            frame: self.game.snapshot(),
            events,
            cues: self.game.take_cues(),
            stall_ms: self
                .game
                .take_stall()
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        };

        match serde_json::to_string(&out) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode frame: {e}");
                String::from("{}")
            }
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
