//! Defenders: bouncing bodies with a bobbing run animation
//!
//! A defender's stored position is the simulation position. The bobbed
//! position (`rendered_pos`) is what gets drawn, and gameplay checks
//! (nearest-defender search, tackles) read the bobbed one as well.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::LevelParams;
use crate::consts::*;

/// How ranks that would stand below the field are handled when building a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RosterPolicy {
    /// Skip ranks whose home row is off the field
    #[default]
    OnFieldOnly,
    /// Spawn every rank, even below the field line
    KeepAll,
}

/// A single defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    /// 1-based rank, fixes the home row and the velocity signs
    pub rank: u32,
    pub pos: Vec2,
    /// Persistent per-tick velocity
    pub vel: Vec2,
    /// Offset into the bob cycle
    pub anim_phase: u64,
}

/// Home row for a defender rank, or `None` when it falls off the field
pub fn find_y_pos(rank: u32) -> Option<f32> {
    let y = home_row(rank);
    (y <= DEFENDER_ROW_LIMIT).then_some(y)
}

#[inline]
fn home_row(rank: u32) -> f32 {
    DEFENDER_FIRST_Y + rank as f32 * DEFENDER_SPACING
}

/// Starting velocity for a rank at a given level
pub fn seed_velocity(rank: u32, level: u32) -> Vec2 {
    let level = level as f32;
    let vx_sign = if rank % 2 == 0 { 1.0 } else { -1.0 };
    let vy_sign = if rank % 3 == 0 { 1.0 } else { -1.0 };
    Vec2::new((1.5 + 0.2 * level) * vx_sign, (1.0 + 0.15 * level) * vy_sign)
}

impl Defender {
    pub fn new(rank: u32, level: u32) -> Self {
        Self {
            rank,
            pos: Vec2::new(DEFENDER_START_X, home_row(rank)),
            vel: seed_velocity(rank, level),
            anim_phase: u64::from(rank) * 7,
        }
    }

    /// Advance one tick, reflecting off the bounce bounds
    pub fn step(&mut self) {
        self.pos += self.vel;

        if self.pos.x <= DEFENDER_MIN_X || self.pos.x >= DEFENDER_MAX_X {
            self.vel.x = -self.vel.x;
            self.pos.x += self.vel.x;
        }

        if self.pos.y <= DEFENDER_MIN_Y || self.pos.y >= DEFENDER_MAX_Y {
            self.vel.y = -self.vel.y;
            self.pos.y += self.vel.y;
        }
    }

    /// Vertical bob in whole pixels for the given tick
    pub fn bob_offset(&self, tick: u64) -> f32 {
        let t = (tick + self.anim_phase) as f32 / 12.0;
        (BOB_AMPLITUDE * t.sin()).trunc()
    }

    /// Drawn position: stored position plus bob
    pub fn rendered_pos(&self, tick: u64) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.bob_offset(tick))
    }

    /// Sprite tilt for the current run-cycle frame (0 on the upright frame)
    pub fn sprite_tilt(&self, tick: u64) -> f32 {
        if anim_frame(tick) == 0 {
            0.0
        } else if self.rank % 2 == 0 {
            STEP_TILT_DEG
        } else {
            -STEP_TILT_DEG
        }
    }
}

/// Two-frame run cycle, switching every `ANIM_FRAME_TICKS`
#[inline]
pub fn anim_frame(tick: u64) -> usize {
    ((tick / ANIM_FRAME_TICKS) % 2) as usize
}

/// Build `count` defenders ranked `1..=count`
pub fn spawn(count: u32, level: u32, policy: RosterPolicy) -> Vec<Defender> {
    (1..=count)
        .filter(|&rank| policy == RosterPolicy::KeepAll || find_y_pos(rank).is_some())
        .map(|rank| Defender::new(rank, level))
        .collect()
}

/// Fresh roster for a level
pub fn spawn_roster(params: &LevelParams, policy: RosterPolicy) -> Vec<Defender> {
    let roster = spawn(params.defender_count, params.level, policy);
    log::debug!(
        "Level {}: {} of {} defenders on the field",
        params.level,
        roster.len(),
        params.defender_count
    );
    roster
}

/// Random sideways shuffle; anything that lands at or past the edges snaps to midfield
pub fn drift_x<R: Rng + ?Sized>(current_x: f32, rng: &mut R) -> f32 {
    let moved = current_x + rng.random_range(-50..50) as f32;
    if moved >= 950.0 || moved <= 200.0 {
        500.0
    } else {
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_defender_row() {
        assert_eq!(find_y_pos(1), Some(175.0));
    }

    #[test]
    fn test_rows_are_150_apart() {
        for rank in 1..5 {
            let a = find_y_pos(rank).unwrap();
            let b = find_y_pos(rank + 1).unwrap();
            assert_eq!(b - a, 150.0);
        }
    }

    #[test]
    fn test_rank_six_off_field() {
        assert_eq!(find_y_pos(5), Some(775.0));
        assert_eq!(find_y_pos(6), None);
        assert_eq!(find_y_pos(40), None);
    }

    #[test]
    fn test_spawn_empty() {
        assert!(spawn(0, 1, RosterPolicy::OnFieldOnly).is_empty());
    }

    #[test]
    fn test_spawn_four_ranked() {
        let roster = spawn(4, 4, RosterPolicy::OnFieldOnly);
        let ranks: Vec<u32> = roster.iter().map(|d| d.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(roster.iter().all(|d| d.pos.x == 400.0));
        assert_eq!(roster[2].pos.y, 475.0);
    }

    #[test]
    fn test_roster_policy() {
        let params = LevelParams::for_level(7);
        assert_eq!(spawn_roster(&params, RosterPolicy::OnFieldOnly).len(), 5);

        let all = spawn_roster(&params, RosterPolicy::KeepAll);
        assert_eq!(all.len(), 7);
        assert_eq!(all[5].pos.y, 925.0);
    }

    #[test]
    fn test_seed_velocity_signs() {
        let v1 = seed_velocity(1, 1);
        assert!((v1.x - -1.7).abs() < 1e-5);
        assert!((v1.y - -1.15).abs() < 1e-5);

        let v6 = seed_velocity(6, 2);
        assert!((v6.x - 1.9).abs() < 1e-5);
        assert!((v6.y - 1.3).abs() < 1e-5);
    }

    #[test]
    fn test_step_integrates() {
        let mut d = Defender::new(2, 1);
        let start = d.pos;
        d.step();
        assert_eq!(d.pos, start + d.vel);
    }

    #[test]
    fn test_step_bounces_horizontally() {
        let mut d = Defender::new(2, 1);
        d.pos = Vec2::new(849.0, 500.0);
        d.vel = Vec2::new(2.0, 0.0);
        d.step();
        // 851 hits the wall, velocity flips and pushes back to 849
        assert_eq!(d.vel.x, -2.0);
        assert_eq!(d.pos.x, 849.0);
    }

    #[test]
    fn test_step_bounces_vertically() {
        let mut d = Defender::new(1, 1);
        d.pos = Vec2::new(500.0, 201.0);
        d.vel = Vec2::new(0.0, -1.5);
        d.step();
        assert_eq!(d.vel.y, 1.5);
        assert_eq!(d.pos.y, 201.0);
    }

    #[test]
    fn test_bounded_over_many_ticks() {
        let mut roster = spawn(5, 5, RosterPolicy::OnFieldOnly);
        for _ in 0..5_000 {
            for d in &mut roster {
                d.step();
                assert!(d.pos.x > 140.0 && d.pos.x < 860.0);
            }
        }
    }

    #[test]
    fn test_bob_only_affects_rendered_y() {
        let d = Defender::new(3, 1);
        for tick in 0..200 {
            let bob = d.bob_offset(tick);
            assert!(bob.abs() <= 3.0);
            assert_eq!(bob, bob.trunc());
            assert_eq!(d.rendered_pos(tick).y, d.pos.y + bob);
            assert_eq!(d.rendered_pos(tick).x, d.pos.x);
        }
        assert_eq!(d.pos.y, 475.0);
    }

    #[test]
    fn test_anim_frames_alternate() {
        assert_eq!(anim_frame(0), 0);
        assert_eq!(anim_frame(9), 0);
        assert_eq!(anim_frame(10), 1);
        assert_eq!(anim_frame(20), 0);

        let even = Defender::new(2, 1);
        let odd = Defender::new(3, 1);
        assert_eq!(even.sprite_tilt(5), 0.0);
        assert_eq!(even.sprite_tilt(15), 8.0);
        assert_eq!(odd.sprite_tilt(15), -8.0);
    }

    #[test]
    fn test_drift_snaps_back_from_outside() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(drift_x(-100.0, &mut rng), 500.0);
            assert_eq!(drift_x(1200.0, &mut rng), 500.0);
        }
    }

    #[test]
    fn test_drift_stays_near_inside() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            let x = drift_x(600.0, &mut rng);
            assert!((550.0..650.0).contains(&x));
        }
    }
}
