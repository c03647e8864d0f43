//! One simulation frame
//!
//! Order per tick: input → ball physics → defenders → dribble assist →
//! tackle check → goal check. At most one tackle is processed per frame and
//! a tackle ends the frame.

use glam::Vec2;

use super::ball::{Direction, HeldKeys};
use super::collision::{escape_impulse, in_goal, nearest_defender, tackled_by};
use super::state::{GameEvent, GamePhase, SessionState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Arrow keys currently held
    pub held: HeldKeys,
    /// Idle/demo mode - the autopilot drives the ball
    pub idle_mode: bool,
}

impl TickInput {
    pub fn held(held: HeldKeys) -> Self {
        Self {
            held,
            idle_mode: false,
        }
    }

    pub fn idle() -> Self {
        Self {
            held: HeldKeys::NONE,
            idle_mode: true,
        }
    }
}

/// Advance the run by one frame and return what happened
pub fn tick(state: &mut SessionState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.tick += 1;

    let held = if input.idle_mode {
        autopilot(state)
    } else {
        input.held
    };

    let params = state.params();
    state.ball.apply_input(held);
    state.ball.integrate(params.max_speed);

    for defender in &mut state.defenders {
        defender.step();
    }

    // Only changes velocity, so it cannot affect this frame's overlap tests
    if let Some(nearest) = nearest_defender(state.ball.pos, &state.defenders, state.tick) {
        state.ball.vel += escape_impulse(state.ball.pos, nearest.pos);
    }

    if let Some(index) = tackled_by(state.ball.pos, &state.defenders, state.tick) {
        log::trace!("Tackled by rank {}", state.defenders[index].rank);
        lose_life(state, &mut events);
        return events;
    }

    if in_goal(state.ball.pos) {
        score_goal(state, &mut events);
    }

    events
}

fn lose_life(state: &mut SessionState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        if let Some(high_score) = state.record_score() {
            events.push(GameEvent::HighScoreBeaten { high_score });
        }
        log::info!(
            "Game over at level {} with score {} (best {})",
            state.level,
            state.score,
            state.high_score
        );
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
    } else {
        state.ball.reset();
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
    }
}

fn score_goal(state: &mut SessionState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    events.push(GameEvent::GoalScored { score: state.score });

    if let Some(high_score) = state.record_score() {
        events.push(GameEvent::HighScoreBeaten { high_score });
    }

    state.advance_level();
    events.push(GameEvent::LevelAdvanced { level: state.level });
}

/// Horizontal slack before the autopilot bothers lining up with the goal
const AIM_SLACK: f32 = 20.0;

/// Steer toward the goal; sidestep when a defender ahead is inside the danger radius
pub fn autopilot(state: &SessionState) -> HeldKeys {
    let ball = state.ball.pos;
    let mut held = HeldKeys::NONE;

    let threat = nearest_defender(ball, &state.defenders, state.tick)
        .filter(|n| n.dist_sq < DANGER_RADIUS * DANGER_RADIUS && n.pos.y < ball.y);

    match threat {
        Some(nearest) => {
            held.press(sidestep(ball, nearest.pos));
        }
        None => {
            let dx = GOAL_CENTER.x - ball.x;
            if dx > AIM_SLACK {
                held.press(Direction::Right);
            } else if dx < -AIM_SLACK {
                held.press(Direction::Left);
            }
            held.press(Direction::Up);
        }
    }

    held
}

fn sidestep(ball: Vec2, defender: Vec2) -> Direction {
    let prefer_right = ball.x >= defender.x;
    let room_right = BALL_MAX_X - ball.x;
    let room_left = ball.x - BALL_MIN_X;
    if prefer_right && room_right > BALL_SIZE {
        Direction::Right
    } else if !prefer_right && room_left > BALL_SIZE {
        Direction::Left
    } else if room_right > room_left {
        Direction::Right
    } else {
        Direction::Left
    }
}
