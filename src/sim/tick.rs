//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one 1/30 s step:
//! intents -> motion -> collisions -> lifecycle.

use super::collision::{resolve_laser_hits, resolve_ship_collision};
use super::motion::{integrate_asteroids, integrate_lasers, integrate_ship};
use super::state::{GameEvent, GameState, Ship};
use crate::consts::*;
use crate::secs_to_ticks;

/// Rotation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Left,
    Right,
}

impl Rotation {
    /// Rotation rate in radians per tick (left is counter-clockwise on screen)
    pub fn rate(self) -> f32 {
        let per_tick = TURN_SPEED.to_radians() / FPS as f32;
        match self {
            Rotation::None => 0.0,
            Rotation::Left => per_tick,
            Rotation::Right => -per_tick,
        }
    }
}

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate: Rotation,
    pub thrust: bool,
    /// Trigger pressed since the previous tick
    pub fire: bool,
    /// Trigger released since the previous tick (re-arms the gun)
    pub release: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    let was_exploding = state.ship.is_exploding();

    if !state.ship.dead {
        apply_intents(state, input);
    }
    update_thrust_sound(state);

    // Motion
    integrate_ship(&mut state.ship, state.arena);
    integrate_lasers(&mut state.ship, state.arena);
    integrate_asteroids(&mut state.asteroids, state.arena);

    // Collisions
    resolve_laser_hits(state);
    resolve_ship_collision(state);

    // Lifecycle
    if was_exploding {
        advance_explosion(state);
    } else {
        advance_blink(&mut state.ship);
    }
    advance_laser_explosions(&mut state.ship);
    advance_text(state);
}

/// Map intents onto the ship: rotation, thrust flag and the fire trigger
fn apply_intents(state: &mut GameState, input: &TickInput) {
    let ship = &mut state.ship;
    ship.rot = input.rotate.rate();
    ship.thrusting = input.thrust;

    // A release sampled with a press may come before or after it
    if input.release {
        ship.can_shoot = true;
    }
    if input.fire && ship.can_shoot && ship.shoot() {
        state.events.push(GameEvent::LaserFired);
    }
    if input.release {
        ship.can_shoot = true;
    }
}

/// Emit thruster loop start/stop on edges of the thrusting state
fn update_thrust_sound(state: &mut GameState) {
    let thrusting = state.ship.thrusting && !state.ship.dead;
    if thrusting && !state.thrust_sounding {
        state.events.push(GameEvent::ThrustStarted);
    } else if !thrusting && state.thrust_sounding {
        state.events.push(GameEvent::ThrustStopped);
    }
    state.thrust_sounding = thrusting;
}

/// Count down the invulnerability blink
fn advance_blink(ship: &mut Ship) {
    if ship.blink_number == 0 {
        return;
    }
    ship.blink_time = ship.blink_time.saturating_sub(1);
    if ship.blink_time == 0 {
        ship.blink_time = secs_to_ticks(SHIP_BLINK_DUR);
        ship.blink_number -= 1;
    }
}

/// Count down the ship explosion; on expiry spend a life and respawn or end the game
fn advance_explosion(state: &mut GameState) {
    state.ship.explode_time = state.ship.explode_time.saturating_sub(1);
    if state.ship.explode_time > 0 {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        game_over(state);
    } else {
        state.ship = Ship::new(state.arena.center());
        state.events.push(GameEvent::ShipRespawned);
        log::debug!("Ship respawned, {} lives left", state.lives);
    }
}

fn game_over(state: &mut GameState) {
    let ship = &mut state.ship;
    ship.dead = true;
    ship.thrusting = false;
    ship.rot = 0.0;
    state.text = "GAME OVER".to_string();
    state.text_alpha = 1.0;
    state.events.push(GameEvent::GameOver);
    log::info!(
        "Game over at level {} with score {}",
        state.level + 1,
        state.score
    );
}

/// Count down exploding lasers and drop the finished ones
fn advance_laser_explosions(ship: &mut Ship) {
    ship.lasers.retain_mut(|laser| {
        if laser.explode_time == 0 {
            return true;
        }
        laser.explode_time -= 1;
        laser.explode_time > 0
    });
}

/// Fade the status text; a dead session restarts once it has faded out
fn advance_text(state: &mut GameState) {
    if state.text_alpha >= 0.0 {
        state.text_alpha -= 1.0 / TEXT_FADE_TIME / FPS as f32;
    } else if state.ship.dead {
        state.new_game();
    }
}
