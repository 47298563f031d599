//! Collision detection and damage resolution
//!
//! Two passes run after motion: lasers against asteroids, then the ship
//! against asteroids. Each asteroid resolves at most one laser hit per tick,
//! and the ship resolves at most one collision per tick.

use super::belt::new_asteroid;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::{distance, secs_to_ticks};

/// Outcome of destroying one asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destruction {
    /// The asteroid was removed and the belt still has members
    Removed,
    /// The belt emptied and the next level was generated
    LevelCleared,
}

/// Laser vs. asteroid pass.
///
/// Asteroids are walked in reverse index order so removal (and children being
/// appended at the end) never disturbs the indices still to visit. The first
/// flying laser inside an asteroid's radius destroys it and starts exploding.
pub fn resolve_laser_hits(state: &mut GameState) {
    let mut i = state.asteroids.len();
    while i > 0 {
        i -= 1;
        let roid = &state.asteroids[i];
        let hit = state
            .ship
            .lasers
            .iter()
            .rposition(|laser| !laser.is_exploding() && distance(roid.pos, laser.pos) < roid.radius());

        if let Some(j) = hit {
            let outcome = destroy_asteroid(state, i);
            state.ship.lasers[j].explode_time = secs_to_ticks(LASER_EXPLODE_DUR);
            if outcome == Destruction::LevelCleared {
                // Fresh belt: nothing left from this pass to check.
                break;
            }
        }
    }
}

/// Ship vs. asteroid pass.
///
/// Skipped while the ship is exploding, blinking or dead. The lowest-index
/// overlapping asteroid wins; the ship explodes and that asteroid is destroyed.
pub fn resolve_ship_collision(state: &mut GameState) {
    let ship = &state.ship;
    if ship.is_exploding() || ship.is_invulnerable() || ship.dead {
        return;
    }

    let hit = state
        .asteroids
        .iter()
        .position(|roid| distance(ship.pos, roid.pos) < ship.r + roid.radius());

    if let Some(i) = hit {
        explode_ship(state);
        destroy_asteroid(state, i);
    }
}

/// Start the ship's explosion countdown
pub fn explode_ship(state: &mut GameState) {
    state.ship.explode();
    state.events.push(GameEvent::ShipExploded);
    log::debug!("Ship exploded at ({:.0}, {:.0})", state.ship.pos.x, state.ship.pos.y);
}

/// Destroy the asteroid at `index`: split it, score it and advance the level
/// when the belt is empty.
pub fn destroy_asteroid(state: &mut GameState, index: usize) -> Destruction {
    let roid = state.asteroids.remove(index);

    if let Some(child) = roid.tier.split() {
        for _ in 0..2 {
            let spawned = new_asteroid(&mut state.rng, roid.pos, child, state.level, state.drift);
            state.asteroids.push(spawned);
        }
    }
    state.score += roid.tier.points();

    if state.score > state.highscore {
        state.highscore = state.score;
        state.events.push(GameEvent::HighScore(state.highscore));
    }

    state.events.push(GameEvent::AsteroidHit { tier: roid.tier });
    state.roids_left = state.roids_left.saturating_sub(1);
    state
        .events
        .push(GameEvent::AsteroidRatio(state.asteroid_ratio()));

    log::debug!(
        "Destroyed {:?} asteroid, score {}, {} left",
        roid.tier,
        state.score,
        state.asteroids.len()
    );

    if state.asteroids.is_empty() {
        state.level += 1;
        if state.lives < MAX_LIVES {
            state.lives += 1;
        }
        state.new_level();
        Destruction::LevelCleared
    } else {
        Destruction::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, AsteroidTier, Laser};
    use glam::Vec2;

    fn roid(x: f32, y: f32, tier: AsteroidTier) -> Asteroid {
        Asteroid::new(Vec2::new(x, y), Vec2::ZERO, tier, 0.0, vec![1.0; 8])
    }

    fn laser(x: f32, y: f32) -> Laser {
        Laser {
            pos: Vec2::new(x, y),
            vel: Vec2::new(1.0, 0.0),
            dist: 0.0,
            explode_time: 0,
        }
    }

    fn state_with(roids: Vec<Asteroid>) -> GameState {
        let mut state = GameState::new(1234);
        state.asteroids = roids;
        state.events.clear();
        state
    }

    #[test]
    fn test_large_split_scores_and_grows_belt() {
        let mut state = state_with(vec![roid(100.0, 100.0, AsteroidTier::Large)]);
        let outcome = destroy_asteroid(&mut state, 0);
        assert_eq!(outcome, Destruction::Removed);
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.asteroids.iter().all(|a| a.tier == AsteroidTier::Medium));
        assert!(state.asteroids.iter().all(|a| a.pos == Vec2::new(100.0, 100.0)));
        assert_eq!(state.score, ROIDS_PTS_LGE);
        assert_eq!(state.roids_left, state.roids_total - 1);
    }

    #[test]
    fn test_medium_split_into_small() {
        let mut state = state_with(vec![
            roid(100.0, 100.0, AsteroidTier::Medium),
            roid(500.0, 500.0, AsteroidTier::Large),
        ]);
        destroy_asteroid(&mut state, 0);
        assert_eq!(state.asteroids.len(), 3);
        assert_eq!(
            state
                .asteroids
                .iter()
                .filter(|a| a.tier == AsteroidTier::Small)
                .count(),
            2
        );
        assert_eq!(state.score, ROIDS_PTS_MED);
    }

    #[test]
    fn test_small_is_removed_without_children() {
        let mut state = state_with(vec![
            roid(100.0, 100.0, AsteroidTier::Small),
            roid(500.0, 500.0, AsteroidTier::Large),
        ]);
        destroy_asteroid(&mut state, 0);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.score, ROIDS_PTS_SML);
        assert!(state.events.contains(&GameEvent::AsteroidHit {
            tier: AsteroidTier::Small
        }));
    }

    #[test]
    fn test_highscore_follows_score() {
        let mut state = state_with(vec![
            roid(100.0, 100.0, AsteroidTier::Small),
            roid(500.0, 500.0, AsteroidTier::Large),
        ]);
        state.highscore = 150;
        destroy_asteroid(&mut state, 0);
        assert_eq!(state.highscore, 150);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::HighScore(_))));

        state.score = 149;
        destroy_asteroid(&mut state, 0);
        assert_eq!(state.highscore, 169);
        assert!(state.events.contains(&GameEvent::HighScore(169)));
    }

    #[test]
    fn test_last_asteroid_advances_level() {
        let mut state = state_with(vec![roid(100.0, 100.0, AsteroidTier::Small)]);
        state.lives = 2;
        let outcome = destroy_asteroid(&mut state, 0);
        assert_eq!(outcome, Destruction::LevelCleared);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.asteroids.len(), (ROIDS_NUM + 1) as usize);
        assert_eq!(state.text, "LEVEL 2");
        assert_eq!(state.roids_total, (ROIDS_NUM + 1) * 7);
        assert!(state.events.contains(&GameEvent::LevelStarted { level: 1 }));
    }

    #[test]
    fn test_level_bonus_life_is_capped() {
        let mut state = state_with(vec![roid(100.0, 100.0, AsteroidTier::Small)]);
        state.lives = MAX_LIVES;
        destroy_asteroid(&mut state, 0);
        assert_eq!(state.lives, MAX_LIVES);
    }

    #[test]
    fn test_laser_hit_destroys_and_explodes_laser() {
        let mut state = state_with(vec![roid(100.0, 100.0, AsteroidTier::Large)]);
        state.ship.lasers.push(laser(120.0, 100.0));
        resolve_laser_hits(&mut state);
        assert_eq!(state.asteroids.len(), 2);
        assert_eq!(state.score, ROIDS_PTS_LGE);
        assert_eq!(state.ship.lasers[0].explode_time, 3);
    }

    #[test]
    fn test_exploding_laser_does_not_hit() {
        let mut state = state_with(vec![roid(100.0, 100.0, AsteroidTier::Large)]);
        let mut spent = laser(100.0, 100.0);
        spent.explode_time = 2;
        state.ship.lasers.push(spent);
        resolve_laser_hits(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_one_laser_resolution_per_asteroid() {
        // Two lasers inside one asteroid: only one is consumed
        let mut state = state_with(vec![
            roid(100.0, 100.0, AsteroidTier::Small),
            roid(600.0, 600.0, AsteroidTier::Large),
        ]);
        state.ship.lasers.push(laser(101.0, 100.0));
        state.ship.lasers.push(laser(99.0, 100.0));
        resolve_laser_hits(&mut state);
        assert_eq!(state.score, ROIDS_PTS_SML);
        let exploding = state.ship.lasers.iter().filter(|l| l.is_exploding()).count();
        assert_eq!(exploding, 1);
        // The newest qualifying laser is the one consumed
        assert!(state.ship.lasers[1].is_exploding());
        assert!(!state.ship.lasers[0].is_exploding());
    }

    #[test]
    fn test_laser_in_overlap_hits_highest_index_asteroid() {
        let mut state = state_with(vec![
            roid(100.0, 100.0, AsteroidTier::Large),
            roid(130.0, 100.0, AsteroidTier::Large),
            roid(600.0, 600.0, AsteroidTier::Large),
        ]);
        state.ship.lasers.push(laser(115.0, 100.0));
        resolve_laser_hits(&mut state);

        assert_eq!(state.score, ROIDS_PTS_LGE);
        assert!(state.ship.lasers[0].is_exploding());
        // Index 1 was destroyed; index 0 survives because the laser is spent
        assert_eq!(state.asteroids.len(), 4);
        assert_eq!(state.asteroids[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.asteroids[0].tier, AsteroidTier::Large);
        assert_eq!(state.asteroids[1].pos, Vec2::new(600.0, 600.0));
        assert!(state.asteroids[2..].iter().all(|a| a.tier == AsteroidTier::Medium
            && a.pos == Vec2::new(130.0, 100.0)));
    }

    #[test]
    fn test_children_are_not_rechecked_in_same_pass() {
        let mut state = state_with(vec![
            roid(100.0, 100.0, AsteroidTier::Large),
            roid(600.0, 600.0, AsteroidTier::Large),
        ]);
        state.ship.lasers.push(laser(100.0, 100.0));
        state.ship.lasers.push(laser(100.0, 100.0));
        resolve_laser_hits(&mut state);
        // One large destroyed; the second laser does not touch its children this tick
        assert_eq!(state.asteroids.len(), 3);
        assert_eq!(state.score, ROIDS_PTS_LGE);
    }

    #[test]
    fn test_ship_collision_takes_first_asteroid() {
        let mut state = state_with(vec![
            roid(600.0, 600.0, AsteroidTier::Large),
            roid(390.0, 380.0, AsteroidTier::Small),
            roid(370.0, 380.0, AsteroidTier::Small),
        ]);
        state.ship.blink_number = 0;
        resolve_ship_collision(&mut state);
        assert!(state.ship.is_exploding());
        assert_eq!(state.asteroids.len(), 2);
        // Index 1 was resolved, index 2 survives
        assert_eq!(state.asteroids[1].pos, Vec2::new(370.0, 380.0));
        assert!(state.events.contains(&GameEvent::ShipExploded));
    }

    #[test]
    fn test_blinking_ship_is_immune() {
        let mut state = state_with(vec![roid(380.0, 380.0, AsteroidTier::Large)]);
        assert!(state.ship.is_invulnerable());
        resolve_ship_collision(&mut state);
        assert!(!state.ship.is_exploding());
        assert_eq!(state.asteroids.len(), 1);
    }

    #[test]
    fn test_exploding_ship_does_not_collide_again() {
        let mut state = state_with(vec![roid(380.0, 380.0, AsteroidTier::Large)]);
        state.ship.blink_number = 0;
        state.ship.explode();
        resolve_ship_collision(&mut state);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.score, 0);
    }
}
