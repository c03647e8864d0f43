//! Menus: level select, game over, and the console level prompt

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::consts::MAX_START_LEVEL;
use crate::platform::Key;
use crate::settings::VOLUME_STEP;

/// Rejected level entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelInputError {
    #[error("{0:?} is not a valid level")]
    NotANumber(String),

    #[error("{0} is not a valid level (choose 1 - {max})", max = MAX_START_LEVEL)]
    OutOfRange(i64),
}

/// Parse a typed starting level (1 to `MAX_START_LEVEL`)
pub fn parse_level(text: &str) -> Result<u32, LevelInputError> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| LevelInputError::NotANumber(trimmed.to_string()))?;
    if value < 1 || value > i64::from(MAX_START_LEVEL) {
        return Err(LevelInputError::OutOfRange(value));
    }
    Ok(value as u32)
}

/// Ask for a level until a valid one is entered. `None` at end of input.
pub fn prompt_level<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<u32>> {
    loop {
        write!(output, "Please enter a starting level from 1 - {MAX_START_LEVEL}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_level(&line) {
            Ok(level) => return Ok(Some(level)),
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }
}

/// What the start menu wants done
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartAction {
    None,
    /// Begin a run at this level
    Start(u32),
    /// Change master volume by this much
    Volume(f32),
    ToggleMute,
    Quit,
}

/// Starting-level picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartMenu {
    pub level: u32,
}

impl StartMenu {
    pub fn new(level: u32) -> Self {
        Self {
            level: level.clamp(1, MAX_START_LEVEL),
        }
    }

    pub fn handle(&mut self, key: Key) -> StartAction {
        match key {
            Key::Right => {
                self.level = (self.level + 1).min(MAX_START_LEVEL);
                StartAction::None
            }
            Key::Left => {
                self.level = self.level.saturating_sub(1).max(1);
                StartAction::None
            }
            Key::Confirm => StartAction::Start(self.level),
            Key::VolumeUp => StartAction::Volume(VOLUME_STEP),
            Key::VolumeDown => StartAction::Volume(-VOLUME_STEP),
            Key::ToggleMute => StartAction::ToggleMute,
            Key::Quit => StartAction::Quit,
            Key::Up | Key::Down | Key::Restart => StartAction::None,
        }
    }
}

/// Game-over screen choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    None,
    Restart,
    Quit,
}

pub fn game_over_action(key: Key) -> GameOverAction {
    match key {
        Key::Restart => GameOverAction::Restart,
        Key::Quit => GameOverAction::Quit,
        _ => GameOverAction::None,
    }
}
