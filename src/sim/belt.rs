//! Asteroid factory and belt generation
//!
//! Every random draw comes from the caller's RNG so a seeded session
//! reproduces the same belt.

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, Asteroid, AsteroidDrift, AsteroidTier};
use crate::consts::*;
use crate::distance;

/// Build one asteroid at `pos` with randomized drift, heading and outline.
///
/// Speed scales with the level by `1 + 0.1 * level`.
pub fn new_asteroid<R: Rng>(
    rng: &mut R,
    pos: Vec2,
    tier: AsteroidTier,
    level: u32,
    drift: AsteroidDrift,
) -> Asteroid {
    let max_speed = ROIDS_SPD * (1.0 + 0.1 * level as f32) / FPS as f32;
    let vx = rng.random::<f32>() * max_speed * drift_sign(rng, drift);
    let vy = rng.random::<f32>() * max_speed * drift_sign(rng, drift);
    let angle = rng.random::<f32>() * std::f32::consts::TAU;

    let vert = (rng.random::<f32>() * (ROIDS_VERT + 1) as f32 + (ROIDS_VERT / 2) as f32)
        .floor() as usize;
    let offsets = (0..vert)
        .map(|_| rng.random::<f32>() * ROIDS_JAG * 2.0 + 1.0 - ROIDS_JAG)
        .collect();

    Asteroid::new(pos, Vec2::new(vx, vy), tier, angle, offsets)
}

fn drift_sign<R: Rng>(rng: &mut R, drift: AsteroidDrift) -> f32 {
    // The roll is consumed either way so both policies share one RNG stream.
    let roll = rng.random::<f32>();
    match drift {
        AsteroidDrift::Positive => 1.0,
        AsteroidDrift::Mirrored => {
            if roll < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
    }
}

/// Minimum spawn distance between a belt asteroid and the ship
pub fn spawn_clearance(ship_r: f32) -> f32 {
    ROIDS_SIZE * 2.0 + ship_r
}

/// Populate a level with `ROIDS_NUM + level` large asteroids kept clear of the ship.
///
/// Positions are rejection-sampled; after `BELT_MAX_ATTEMPTS` misses the last
/// candidate is accepted so a tiny arena cannot hang the tick.
pub fn create_belt<R: Rng>(
    rng: &mut R,
    level: u32,
    ship_pos: Vec2,
    ship_r: f32,
    arena: Arena,
    drift: AsteroidDrift,
) -> Vec<Asteroid> {
    let count = (ROIDS_NUM + level) as usize;
    let clearance = spawn_clearance(ship_r);
    let mut belt = Vec::with_capacity(count);

    for _ in 0..count {
        let mut attempts = 0;
        let pos = loop {
            let candidate = Vec2::new(
                (rng.random::<f32>() * arena.width).floor(),
                (rng.random::<f32>() * arena.height).floor(),
            );
            attempts += 1;
            if distance(ship_pos, candidate) >= clearance {
                break candidate;
            }
            if attempts >= BELT_MAX_ATTEMPTS {
                log::warn!(
                    "Belt placement gave up after {} attempts (arena {}x{})",
                    attempts,
                    arena.width,
                    arena.height
                );
                break candidate;
            }
        };
        belt.push(new_asteroid(rng, pos, AsteroidTier::Large, level, drift));
    }

    belt
}
