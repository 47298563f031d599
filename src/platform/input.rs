//! Keyboard state to tick intents
//!
//! Key events only flip flags here; the simulation samples them once per tick.

use crate::distance;
use crate::sim::{GameState, Rotation, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
}

/// Current key state plus trigger edges not yet sampled by a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    rotate: Rotation,
    thrust: bool,
    fire_held: bool,
    fire_pressed: bool,
    fire_released: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently pressed rotation key wins
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.rotate = Rotation::Left,
            Key::Right => self.rotate = Rotation::Right,
            Key::Up => self.thrust = true,
            Key::Space => {
                // Auto-repeat is not a new press
                if !self.fire_held {
                    self.fire_held = true;
                    self.fire_pressed = true;
                }
            }
        }
    }

    /// Releasing either rotation key stops rotating
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left | Key::Right => self.rotate = Rotation::None,
            Key::Up => self.thrust = false,
            Key::Space => {
                if self.fire_held {
                    self.fire_held = false;
                    self.fire_released = true;
                }
            }
        }
    }

    /// Sample intents for the next tick. Trigger edges latch until read here,
    /// so a press and release between two ticks still fires once.
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            rotate: self.rotate,
            thrust: self.thrust,
            fire: std::mem::take(&mut self.fire_pressed),
            release: std::mem::take(&mut self.fire_released),
        }
    }
}

/// Demo pilot for the headless host: turns toward the nearest asteroid,
/// closes in when it is far away and taps the trigger when lined up.
#[derive(Debug, Clone, Default)]
pub struct DemoPilot {
    fired_last_tick: bool,
}

impl DemoPilot {
    /// Heading error (radians) under which the pilot fires
    const AIM_TOLERANCE: f32 = 0.15;
    /// Distance beyond which the pilot thrusts toward its target
    const APPROACH_DISTANCE: f32 = 250.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let ship = &state.ship;
        let Some(target) = state.asteroids.iter().min_by(|a, b| {
            distance(ship.pos, a.pos)
                .partial_cmp(&distance(ship.pos, b.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        }) else {
            let release = std::mem::take(&mut self.fired_last_tick);
            return TickInput {
                release,
                ..Default::default()
            };
        };

        // Screen y grows downwards, headings are counter-clockwise
        let to_target = target.pos - ship.pos;
        let wanted = (-to_target.y).atan2(to_target.x);
        let error = crate::normalize_angle(wanted - ship.angle);

        let rotate = if error > Self::AIM_TOLERANCE / 2.0 {
            Rotation::Left
        } else if error < -Self::AIM_TOLERANCE / 2.0 {
            Rotation::Right
        } else {
            Rotation::None
        };

        // Press on one tick, release on the next
        let fire = error.abs() < Self::AIM_TOLERANCE && !self.fired_last_tick;
        let release = self.fired_last_tick;
        self.fired_last_tick = fire;

        TickInput {
            rotate,
            thrust: error.abs() < Self::AIM_TOLERANCE
                && to_target.length() > Self::APPROACH_DISTANCE,
            fire,
            release,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, AsteroidTier, tick};
    use glam::Vec2;

    #[test]
    fn test_rotation_last_key_wins_and_release_stops() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        assert_eq!(input.tick_input().rotate, Rotation::Right);
        input.key_up(Key::Left);
        assert_eq!(input.tick_input().rotate, Rotation::None);
    }

    #[test]
    fn test_thrust_held_and_fire_edges() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.key_down(Key::Space);
        let first = input.tick_input();
        assert!(first.thrust && first.fire && !first.release);
        // Held keys: thrust persists, the press edge is consumed
        input.key_down(Key::Space);
        let held = input.tick_input();
        assert!(held.thrust && !held.fire && !held.release);
        input.key_up(Key::Space);
        let released = input.tick_input();
        assert!(!released.fire && released.release);
        assert!(!input.tick_input().release);
    }

    #[test]
    fn test_tap_between_ticks_still_fires() {
        let mut state = GameState::new(3);
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_up(Key::Space);
        tick(&mut state, &input.tick_input());
        assert_eq!(state.ship.lasers.len(), 1);
        assert!(state.ship.can_shoot);

        input.key_down(Key::Space);
        input.key_up(Key::Space);
        tick(&mut state, &input.tick_input());
        assert_eq!(state.ship.lasers.len(), 2);
    }

    fn state_with_target(pos: Vec2) -> GameState {
        let mut state = GameState::new(3);
        state.asteroids = vec![Asteroid::new(
            pos,
            Vec2::ZERO,
            AsteroidTier::Large,
            0.0,
            vec![1.0; 6],
        )];
        state
    }

    #[test]
    fn test_pilot_turns_toward_target() {
        // Ship points up; target to the right needs a clockwise (right) turn
        let state = state_with_target(Vec2::new(700.0, 380.0));
        let mut pilot = DemoPilot::new();
        let input = pilot.next_input(&state);
        assert_eq!(input.rotate, Rotation::Right);
        assert!(!input.fire);
    }

    #[test]
    fn test_pilot_taps_fire_when_aligned() {
        // Directly above the ship: already aligned
        let state = state_with_target(Vec2::new(380.0, 60.0));
        let mut pilot = DemoPilot::new();
        let first = pilot.next_input(&state);
        assert!(first.fire);
        assert_eq!(first.rotate, Rotation::None);
        assert!(first.thrust);
        // Trigger is released on the next tick so the ship can fire again
        let second = pilot.next_input(&state);
        assert!(!second.fire && second.release);
        assert!(pilot.next_input(&state).fire);
    }

    #[test]
    fn test_pilot_idles_without_targets() {
        let mut state = GameState::new(3);
        state.asteroids.clear();
        assert_eq!(DemoPilot::new().next_input(&state), TickInput::default());
    }
}
