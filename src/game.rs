//! Run driver
//!
//! Owns the session, the settings and the store, and moves between screens:
//! start menu → playing → game over → (restart → start menu) or quit.
//! The high score is written whenever the simulation reports a new best.

use std::time::Duration;

use crate::audio::{self, Cue, SoundCue};
use crate::consts::*;
use crate::highscores::HighScore;
use crate::persistence::Store;
use crate::platform::Key;
use crate::settings::Settings;
use crate::sim::{GameEvent, RenderFrame, SessionState, TickInput, tick};
use crate::ui::{GameOverAction, StartAction, StartMenu, game_over_action};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    StartMenu,
    Playing,
    GameOver,
    /// Player quit; the frontend should exit
    Terminated,
}

/// Game instance holding all state
pub struct Game<S: Store> {
    store: S,
    settings: Settings,
    session: SessionState,
    screen: Screen,
    menu: StartMenu,
    cues: Vec<Cue>,
    stall: Option<Duration>,
}

impl<S: Store> Game<S> {
    /// Load settings and the high score, and open the start menu
    pub fn new(store: S) -> Self {
        let settings = Settings::load(&store);
        let high_score = HighScore::load(&store).high_score;
        let session = SessionState::new(settings.starting_level, high_score, settings.roster_policy);
        let menu = StartMenu::new(settings.starting_level);
        Self {
            store,
            settings,
            session,
            screen: Screen::StartMenu,
            menu,
            cues: Vec::new(),
            stall: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Level highlighted in the start menu
    pub fn menu_level(&self) -> u32 {
        self.menu.level
    }

    /// Frame rate the frontend should hold on the current screen
    pub fn target_fps(&self) -> u32 {
        match self.screen {
            Screen::Playing => PLAY_FPS,
            _ => MENU_FPS,
        }
    }

    /// Begin a run at `level` with a full set of lives
    pub fn start_run(&mut self, level: u32) {
        self.session.restart(level);
        self.menu = StartMenu::new(level);
        self.screen = Screen::Playing;
        self.stall = None;
        self.cues.push(Cue::mixed(SoundCue::CrowdAmbience, &self.settings));

        if self.settings.starting_level != self.menu.level {
            self.settings.starting_level = self.menu.level;
            self.settings.save(&mut self.store);
        }
        log::info!("Run started at level {}", self.session.level);
    }

    /// Handle a discrete key press on the menu screens
    pub fn handle_key(&mut self, key: Key) {
        match self.screen {
            Screen::StartMenu => match self.menu.handle(key) {
                StartAction::Start(level) => self.start_run(level),
                StartAction::Volume(delta) => {
                    self.settings.adjust_volume(delta);
                    self.settings.save(&mut self.store);
                }
                StartAction::ToggleMute => {
                    self.settings.toggle_mute();
                    self.settings.save(&mut self.store);
                }
                StartAction::Quit => self.screen = Screen::Terminated,
                StartAction::None => {}
            },
            Screen::GameOver => match game_over_action(key) {
                GameOverAction::Restart => self.screen = Screen::StartMenu,
                GameOverAction::Quit => self.screen = Screen::Terminated,
                GameOverAction::None => {}
            },
            Screen::Playing => {
                if key == Key::Quit {
                    self.screen = Screen::Terminated;
                }
            }
            Screen::Terminated => {}
        }
    }

    /// Simulate one frame when a run is on. Returns the frame's events.
    pub fn frame(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if self.screen != Screen::Playing {
            return Vec::new();
        }

        let events = tick(&mut self.session, input);
        for event in &events {
            self.on_event(event);
        }
        events
    }

    fn on_event(&mut self, event: &GameEvent) {
        for &sound in audio::cues_for(event) {
            self.cues.push(Cue::mixed(sound, &self.settings));
        }

        match *event {
            GameEvent::HighScoreBeaten { high_score } => {
                HighScore::new(high_score).save(&mut self.store);
            }
            GameEvent::LifeLost { lives_left } => {
                log::info!("Tackled! {lives_left} lives left");
                self.stall = Some(Duration::from_millis(LIFE_LOST_PAUSE_MS));
            }
            GameEvent::LevelAdvanced { .. } => {
                self.stall = Some(Duration::from_millis(LEVEL_UP_PAUSE_MS));
            }
            GameEvent::GameOver { .. } => {
                self.screen = Screen::GameOver;
            }
            GameEvent::GoalScored { score } => {
                log::info!("Goal! Score {score}");
            }
        }
    }

    pub fn snapshot(&self) -> RenderFrame {
        self.session.snapshot()
    }

    /// Sounds queued since the last call
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Pause the frontend must block for before the next frame, if any
    pub fn take_stall(&mut self) -> Option<Duration> {
        self.stall.take()
    }
}
