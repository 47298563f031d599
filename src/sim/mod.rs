//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - Stable iteration order (by list index)
//! - No rendering, audio or storage dependencies; side effects leave as events

pub mod belt;
pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use belt::{create_belt, new_asteroid, spawn_clearance};
pub use collision::{Destruction, destroy_asteroid, resolve_laser_hits, resolve_ship_collision};
pub use state::{
    Arena, Asteroid, AsteroidDrift, AsteroidTier, GameEvent, GameState, Laser, Ship, ShipStatus,
};
pub use tick::{Rotation, TickInput, tick};
