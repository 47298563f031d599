//! Per-tick motion integration
//!
//! Velocities are stored in px/tick, so integration is a plain add.
//! Ship and asteroids wrap with a radius margin; lasers wrap at the raw edge.

use super::state::{Arena, Asteroid, Ship};
use crate::consts::*;
use crate::{normalize_angle, wrap_point};

/// Apply thrust along the heading, or friction when coasting.
///
/// Friction is exponential damping: `vel -= FRICTION * vel / FPS`.
pub fn apply_thrust(ship: &mut Ship) {
    let fps = FPS as f32;
    if ship.thrusting && !ship.dead {
        ship.vel += ship.heading() * (SHIP_THRUST / fps);
    } else {
        ship.vel -= ship.vel * (FRICTION / fps);
    }
}

/// Advance the ship one tick. Rotation and translation freeze while exploding;
/// the edge wrap always applies. The heading stays in `[-π, π)`.
pub fn integrate_ship(ship: &mut Ship, arena: Arena) {
    apply_thrust(ship);
    if !ship.is_exploding() {
        ship.angle = normalize_angle(ship.angle + ship.rot);
        ship.pos += ship.vel;
    }
    ship.pos = wrap_point(ship.pos, arena.size(), ship.r);
}

/// Move flying lasers and drop those that have outrun their range.
///
/// A laser is removed on the same tick its travelled distance first exceeds
/// `LASER_DIST * width`. Exploding lasers hold still.
pub fn integrate_lasers(ship: &mut Ship, arena: Arena) {
    let range = arena.laser_range();
    let size = arena.size();
    ship.lasers.retain_mut(|laser| {
        if laser.is_exploding() {
            return true;
        }
        laser.pos += laser.vel;
        laser.dist += laser.vel.length();
        if laser.dist > range {
            return false;
        }
        laser.pos = wrap_point(laser.pos, size, 0.0);
        true
    });
}

/// Drift every asteroid and wrap it around the arena
pub fn integrate_asteroids(asteroids: &mut [Asteroid], arena: Arena) {
    let size = arena.size();
    for roid in asteroids.iter_mut() {
        roid.pos += roid.vel;
        roid.pos = wrap_point(roid.pos, size, roid.radius());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{AsteroidTier, Laser};
    use glam::Vec2;

    fn ship_at(x: f32, y: f32) -> Ship {
        Ship::new(Vec2::new(x, y))
    }

    #[test]
    fn test_thrust_accelerates_along_heading() {
        let mut ship = ship_at(100.0, 100.0);
        ship.thrusting = true;
        // Pointing up, so y velocity goes negative (screen coordinates)
        integrate_ship(&mut ship, Arena::default());
        assert!(ship.vel.y < 0.0);
        assert!(ship.vel.x.abs() < 1e-5);
        assert!((ship.vel.length() - SHIP_THRUST / FPS as f32).abs() < 1e-5);
        assert!(ship.pos.y < 100.0);
    }

    #[test]
    fn test_friction_decays_exponentially() {
        let mut ship = ship_at(100.0, 100.0);
        ship.vel = Vec2::new(3.0, 0.0);
        integrate_ship(&mut ship, Arena::default());
        let expected = 3.0 - FRICTION * 3.0 / FPS as f32;
        assert!((ship.vel.x - expected).abs() < 1e-5);
        // Never flips sign or stops outright
        for _ in 0..300 {
            integrate_ship(&mut ship, Arena::default());
        }
        assert!(ship.vel.x > 0.0);
        assert!(ship.vel.x < 0.01);
    }

    #[test]
    fn test_dead_ship_cannot_thrust() {
        let mut ship = ship_at(100.0, 100.0);
        ship.dead = true;
        ship.thrusting = true;
        integrate_ship(&mut ship, Arena::default());
        assert_eq!(ship.vel, Vec2::ZERO);
    }

    #[test]
    fn test_long_spin_keeps_turning() {
        use std::f32::consts::PI;
        let mut ship = ship_at(100.0, 100.0);
        ship.rot = TURN_SPEED.to_radians() / FPS as f32;
        // An hour of holding one rotation key
        for _ in 0..FPS * 3600 {
            integrate_ship(&mut ship, Arena::default());
            assert!((-PI..PI).contains(&ship.angle));
        }
        let before = ship.angle;
        integrate_ship(&mut ship, Arena::default());
        let turned = normalize_angle(ship.angle - before);
        assert!((turned - ship.rot).abs() < 1e-4);
    }

    #[test]
    fn test_exploding_ship_holds_position() {
        let mut ship = ship_at(100.0, 100.0);
        ship.vel = Vec2::new(2.0, 2.0);
        ship.rot = 0.5;
        ship.explode();
        let angle = ship.angle;
        integrate_ship(&mut ship, Arena::default());
        assert_eq!(ship.pos, Vec2::new(100.0, 100.0));
        assert_eq!(ship.angle, angle);
    }

    #[test]
    fn test_ship_wraps_with_radius_margin() {
        let arena = Arena::default();
        let mut ship = ship_at(arena.width + 14.0, 50.0);
        ship.vel = Vec2::new(2.0, 0.0);
        integrate_ship(&mut ship, arena);
        assert_eq!(ship.pos.x, -ship.r);

        let mut ship = ship_at(50.0, -14.0);
        ship.vel = Vec2::new(0.0, -2.0);
        integrate_ship(&mut ship, arena);
        assert_eq!(ship.pos.y, arena.height + ship.r);
    }

    #[test]
    fn test_laser_travels_and_expires() {
        let arena = Arena::default();
        let mut ship = ship_at(380.0, 380.0);
        ship.shoot();
        let step = LASER_SPD / FPS as f32;
        let mut ticks = 0;
        let mut last_dist = 0.0;
        while !ship.lasers.is_empty() {
            integrate_lasers(&mut ship, arena);
            ticks += 1;
            if let Some(laser) = ship.lasers.first() {
                assert!(laser.dist >= last_dist);
                assert!(laser.dist <= arena.laser_range());
                last_dist = laser.dist;
            }
            assert!(ticks < 1000);
        }
        // Removed on the first tick its distance exceeded the range
        let expected = (arena.laser_range() / step).floor() as u32 + 1;
        assert_eq!(ticks, expected);
    }

    #[test]
    fn test_exploding_laser_holds_still() {
        let mut ship = ship_at(380.0, 380.0);
        ship.lasers.push(Laser {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(5.0, 0.0),
            dist: 0.0,
            explode_time: 2,
        });
        integrate_lasers(&mut ship, Arena::default());
        assert_eq!(ship.lasers[0].pos, Vec2::new(10.0, 10.0));
        assert_eq!(ship.lasers[0].dist, 0.0);
    }

    #[test]
    fn test_laser_wraps_without_margin() {
        let arena = Arena::default();
        let mut ship = ship_at(380.0, 380.0);
        ship.lasers.push(Laser {
            pos: Vec2::new(arena.width - 1.0, 5.0),
            vel: Vec2::new(5.0, -10.0),
            dist: 0.0,
            explode_time: 0,
        });
        integrate_lasers(&mut ship, arena);
        assert_eq!(ship.lasers[0].pos, Vec2::new(0.0, arena.height));
    }

    #[test]
    fn test_asteroids_drift_and_wrap() {
        let arena = Arena::default();
        let mut roids = vec![Asteroid::new(
            Vec2::new(arena.width + 49.0, 100.0),
            Vec2::new(2.0, 1.0),
            AsteroidTier::Large,
            0.0,
            vec![1.0; 8],
        )];
        integrate_asteroids(&mut roids, arena);
        assert_eq!(roids[0].pos, Vec2::new(-50.0, 101.0));
    }
}
