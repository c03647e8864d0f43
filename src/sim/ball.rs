//! The ball: arrow-key acceleration, friction, speed cap and field walls

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arrow key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Screen-space unit vector (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Up => 4,
            Direction::Down => 8,
        }
    }
}

/// Snapshot of which arrow keys are held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys(u8);

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys(0);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn with(mut self, dir: Direction) -> Self {
        self.press(dir);
        self
    }

    pub fn press(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn is_held(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.is_held(*d))
    }
}

impl FromIterator<Direction> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(HeldKeys::NONE, HeldKeys::with)
    }
}

/// The player's ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: BALL_SPAWN,
            vel: Vec2::ZERO,
        }
    }
}

impl Ball {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the kick-off spot, at rest
    pub fn reset(&mut self) {
        self.pos = BALL_SPAWN;
        self.vel = Vec2::ZERO;
    }

    /// Each held key adds a fixed kick along its axis; opposite keys cancel
    pub fn apply_input(&mut self, held: HeldKeys) {
        for dir in held.iter() {
            self.vel += dir.unit() * BALL_ACCELERATION;
        }
    }

    /// Friction, speed cap, move, then clamp to the walls.
    ///
    /// Velocity is left alone when the ball hits a wall, so a ball pushed
    /// into a wall keeps pressing against it until friction bleeds it off.
    pub fn integrate(&mut self, max_speed: f32) {
        self.vel *= BALL_FRICTION;

        let speed = self.vel.length();
        if speed > max_speed && speed > 0.0 {
            self.vel *= max_speed / speed;
        }

        self.pos += self.vel;
        self.pos.x = self.pos.x.clamp(BALL_MIN_X, BALL_MAX_X);
        self.pos.y = self.pos.y.clamp(BALL_MIN_Y, BALL_MAX_Y);
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reset() {
        let mut ball = Ball {
            pos: Vec2::new(123.0, 456.0),
            vel: Vec2::new(3.0, -4.0),
        };
        ball.reset();
        assert_eq!(ball.pos, Vec2::new(500.0, 900.0));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_input_combines() {
        let mut ball = Ball::new();
        ball.apply_input(HeldKeys::NONE.with(Direction::Left).with(Direction::Up));
        assert_eq!(ball.vel, Vec2::new(-1.0, -1.0));

        let mut ball = Ball::new();
        ball.apply_input([Direction::Left, Direction::Right].into_iter().collect());
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_friction_then_move() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(500.0, 500.0);
        ball.vel = Vec2::new(10.0, 0.0);
        ball.integrate(12.0);
        assert!((ball.vel.x - 9.0).abs() < 1e-5);
        assert!((ball.pos.x - 509.0).abs() < 1e-4);
    }

    #[test]
    fn test_speed_clamp_keeps_direction() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(500.0, 500.0);
        ball.vel = Vec2::new(30.0, 40.0);
        ball.integrate(12.0);
        assert!((ball.speed() - 12.0).abs() < 1e-4);
        assert!((ball.vel.x / ball.vel.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_wall_clamp_keeps_velocity() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(895.0, 500.0);
        ball.vel = Vec2::new(10.0, 0.0);
        ball.integrate(12.0);
        assert_eq!(ball.pos.x, 900.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_bits_round_trip_masked() {
        let held = HeldKeys::from_bits(0xff);
        assert_eq!(held.bits(), 0b1111);
        assert_eq!(held.iter().count(), 4);
    }

    fn held_keys() -> impl Strategy<Value = HeldKeys> {
        (0u8..16).prop_map(HeldKeys::from_bits)
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_cap(
            level in 1u32..20,
            inputs in prop::collection::vec(held_keys(), 1..300),
        ) {
            let max_speed = crate::sim::LevelParams::for_level(level).max_speed;
            let mut ball = Ball::new();
            for held in inputs {
                ball.apply_input(held);
                ball.integrate(max_speed);
                prop_assert!(ball.speed() <= max_speed + 1e-3);
                prop_assert!(ball.pos.x >= BALL_MIN_X && ball.pos.x <= BALL_MAX_X);
                prop_assert!(ball.pos.y >= BALL_MIN_Y && ball.pos.y <= BALL_MAX_Y);
            }
        }
    }
}
