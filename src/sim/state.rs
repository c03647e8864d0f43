//! Session state and the per-frame snapshot handed to frontends
//!
//! `SessionState` owns the ball and the defender roster. The level
//! parameters are always derived from `level`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::defender::{self, Defender, RosterPolicy};
use super::level::LevelParams;
use crate::consts::STARTING_LIVES;

/// Phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Out of lives; waiting for restart or quit
    GameOver,
}

/// One-shot events emitted by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Tackled with lives to spare
    LifeLost { lives_left: u32 },
    /// Tackled on the last life
    GameOver { final_score: u32 },
    GoalScored { score: u32 },
    LevelAdvanced { level: u32 },
    /// The best score so far went up; the new value should be persisted
    HighScoreBeaten { high_score: u32 },
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    /// Frames simulated since the program started; drives animation
    pub tick: u64,
    pub ball: Ball,
    /// Ordered by rank
    pub defenders: Vec<Defender>,
    pub roster_policy: RosterPolicy,
}

impl SessionState {
    /// Start a run at `level`
    pub fn new(level: u32, high_score: u32, roster_policy: RosterPolicy) -> Self {
        let params = LevelParams::for_level(level);
        Self {
            level: params.level,
            score: 0,
            lives: STARTING_LIVES,
            high_score,
            phase: GamePhase::Playing,
            tick: 0,
            ball: Ball::new(),
            defenders: defender::spawn_roster(&params, roster_policy),
            roster_policy,
        }
    }

    /// Begin a fresh run, keeping the high score and the animation clock
    pub fn restart(&mut self, level: u32) {
        let tick = self.tick;
        *self = Self::new(level, self.high_score, self.roster_policy);
        self.tick = tick;
    }

    pub fn params(&self) -> LevelParams {
        LevelParams::for_level(self.level)
    }

    /// Move to the next level: new roster, ball back on the spot
    pub fn advance_level(&mut self) {
        self.level += 1;
        let params = self.params();
        self.defenders = defender::spawn_roster(&params, self.roster_policy);
        self.ball.reset();
        log::info!(
            "Level {}: {} defenders, top speed {}",
            params.level,
            self.defenders.len(),
            params.max_speed
        );
    }

    /// Raise the high score if the current score beats it
    pub fn record_score(&mut self) -> Option<u32> {
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Everything a renderer needs for this frame
    pub fn snapshot(&self) -> RenderFrame {
        RenderFrame {
            ball: self.ball.pos,
            defenders: self
                .defenders
                .iter()
                .map(|d| DefenderSprite {
                    rank: d.rank,
                    pos: d.rendered_pos(self.tick),
                    tilt_deg: d.sprite_tilt(self.tick),
                })
                .collect(),
            hud: Hud {
                level: self.level,
                level_badge: self.params().display_level(),
                score: self.score,
                lives: self.lives,
                high_score: self.high_score,
            },
            phase: self.phase,
        }
    }
}

/// Drawn defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenderSprite {
    pub rank: u32,
    /// Bounced and bobbed position
    pub pos: Vec2,
    pub tilt_deg: f32,
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub level: u32,
    /// Which level image to show
    pub level_badge: u32,
    pub score: u32,
    pub lives: u32,
    pub high_score: u32,
}

/// Per-frame view of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub ball: Vec2,
    pub defenders: Vec<DefenderSprite>,
    pub hud: Hud,
    pub phase: GamePhase,
}
