//! Overlap tests and the dribble assist
//!
//! All bodies collide as axis-aligned sprite boxes. Defenders are tested at
//! their bobbed (drawn) position, using the box of whichever run-cycle
//! frame is showing. The ball box sits on whole pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::defender::{Defender, anim_frame};
use crate::consts::*;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

pub fn ball_box(ball_pos: Vec2) -> Aabb {
    Aabb::from_center(ball_pos.trunc(), BALL_SIZE)
}

/// Box of the defender sprite drawn on `tick`; the tilted frame is larger
pub fn defender_box(rendered_pos: Vec2, tick: u64) -> Aabb {
    let size = if anim_frame(tick) == 0 {
        DEFENDER_SIZE
    } else {
        TILTED_DEFENDER_SIZE
    };
    Aabb::from_center(rendered_pos, size)
}

pub fn goal_box() -> Aabb {
    Aabb::from_center(GOAL_CENTER, GOAL_SIZE)
}

/// Closest defender to the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub index: usize,
    /// Bobbed position used for the distance
    pub pos: Vec2,
    pub dist_sq: f32,
}

/// Nearest defender by squared distance to its bobbed position.
/// Ties go to the lower rank.
pub fn nearest_defender(ball_pos: Vec2, defenders: &[Defender], tick: u64) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;
    for (index, defender) in defenders.iter().enumerate() {
        let pos = defender.rendered_pos(tick);
        let dist_sq = ball_pos.distance_squared(pos);
        if best.is_none_or(|b| dist_sq < b.dist_sq) {
            best = Some(Nearest { index, pos, dist_sq });
        }
    }
    best
}

/// Push away from a nearby defender, stronger the closer it is.
///
/// Zero outside the danger radius or when the centers coincide.
pub fn escape_impulse(ball_pos: Vec2, defender_pos: Vec2) -> Vec2 {
    let dist_sq = ball_pos.distance_squared(defender_pos);
    if dist_sq <= 0.0 || dist_sq >= DANGER_RADIUS * DANGER_RADIUS {
        return Vec2::ZERO;
    }
    let Some((away, dist)) = crate::direction_and_distance(defender_pos, ball_pos) else {
        return Vec2::ZERO;
    };
    let closeness = (DANGER_RADIUS - dist) / DANGER_RADIUS;
    away * MAX_ESCAPE_FORCE * closeness
}

/// First defender (in rank order) whose drawn box overlaps the ball
pub fn tackled_by(ball_pos: Vec2, defenders: &[Defender], tick: u64) -> Option<usize> {
    let ball = ball_box(ball_pos);
    defenders
        .iter()
        .position(|d| ball.overlaps(&defender_box(d.rendered_pos(tick), tick)))
}

pub fn in_goal(ball_pos: Vec2) -> bool {
    ball_box(ball_pos).overlaps(&goal_box())
}
