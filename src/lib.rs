//! Roid Belt - a classic asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, lifecycle, scoring)
//! - `renderer`: Renderer contract and outline geometry
//! - `audio`: Sound triggers and the tempo-driven music beat
//! - `highscores`: Persistent highscore store
//! - `platform`: Input translation and fixed-rate timing
//! - `game`: Orchestrator wiring the simulation to its collaborators

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StorageError;
pub use game::Game;
pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const FPS: u32 = 30;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / FPS as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default arena size in px
    pub const ARENA_WIDTH: f32 = 760.0;
    pub const ARENA_HEIGHT: f32 = 760.0;

    /// Friction coefficient of space (0 = none, 1 = max)
    pub const FRICTION: f32 = 0.8;
    /// Ship height in px
    pub const SHIP_SIZE: f32 = 30.0;
    /// Duration of the ship's explosion in seconds
    pub const SHIP_EXPLODE_DUR: f32 = 0.3;
    /// Acceleration of the ship in px/s²
    pub const SHIP_THRUST: f32 = 4.0;
    /// Duration of post-spawn invulnerability in seconds
    pub const SHIP_INV_DUR: f32 = 2.0;
    /// Duration of one invulnerability blink in seconds
    pub const SHIP_BLINK_DUR: f32 = 0.1;
    /// Turn speed in degrees per second
    pub const TURN_SPEED: f32 = 360.0;

    /// Starting number of asteroids
    pub const ROIDS_NUM: u32 = 1;
    /// Starting size (diameter) of asteroids in px
    pub const ROIDS_SIZE: f32 = 100.0;
    /// Max starting speed in px/s
    pub const ROIDS_SPD: f32 = 50.0;
    /// Jaggedness of the asteroids (0 = none, 1 = lots)
    pub const ROIDS_JAG: f32 = 0.4;
    /// Average number of vertices on each asteroid
    pub const ROIDS_VERT: u32 = 10;
    /// Points for each tier
    pub const ROIDS_PTS_LGE: u64 = 20;
    pub const ROIDS_PTS_MED: u64 = 50;
    pub const ROIDS_PTS_SML: u64 = 100;
    /// Belt placement gives up resampling after this many attempts
    pub const BELT_MAX_ATTEMPTS: u32 = 1000;
    /// Asteroid slots counted per belt asteroid (one large splits into seven)
    pub const ROIDS_PER_BELT_SLOT: u32 = 7;

    /// Maximum number of lasers on screen at once
    pub const LASER_MAX: usize = 10;
    /// Laser speed in px/s
    pub const LASER_SPD: f32 = 500.0;
    /// Max laser travel as a fraction of screen width
    pub const LASER_DIST: f32 = 0.4;
    /// Duration of the laser's explosion in seconds
    pub const LASER_EXPLODE_DUR: f32 = 0.1;

    /// Status text fade time in seconds
    pub const TEXT_FADE_TIME: f32 = 2.5;
    /// Starting number of lives
    pub const GAME_LIVES: u32 = 3;
    /// Maximum number of lives
    pub const MAX_LIVES: u32 = 5;
}

/// Convert a duration in seconds to a whole number of ticks (rounded up)
#[inline]
pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs * consts::FPS as f32).ceil() as u32
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Straight-line distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Toroidal wrap of one coordinate: leaving `[-margin, extent + margin]`
/// on one side re-enters at the opposite bound.
#[inline]
pub fn wrap_coord(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// Wrap a point against an arena of `size`, with the same margin on both axes
#[inline]
pub fn wrap_point(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_coord(pos.x, size.x, margin),
        wrap_coord(pos.y, size.y, margin),
    )
}
