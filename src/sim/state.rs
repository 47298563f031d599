//! Game state and core simulation types
//!
//! The session aggregate owns the ship (which owns its lasers) and the belt.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::belt::create_belt;
use crate::consts::*;
use crate::secs_to_ticks;

/// Asteroid size tier, related by successive halving of `ROIDS_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// Collision radius in px (50 / 25 / 13)
    pub fn radius(self) -> f32 {
        match self {
            AsteroidTier::Large => (ROIDS_SIZE / 2.0).ceil(),
            AsteroidTier::Medium => (ROIDS_SIZE / 4.0).ceil(),
            AsteroidTier::Small => (ROIDS_SIZE / 8.0).ceil(),
        }
    }

    /// Points awarded for destroying an asteroid of this tier
    pub fn points(self) -> u64 {
        match self {
            AsteroidTier::Large => ROIDS_PTS_LGE,
            AsteroidTier::Medium => ROIDS_PTS_MED,
            AsteroidTier::Small => ROIDS_PTS_SML,
        }
    }

    /// Tier of the two children spawned on destruction (None for the smallest)
    pub fn split(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }
}

/// Sign policy for asteroid velocity components.
///
/// `Positive` keeps both velocity components non-negative, so the belt only
/// ever drifts right and down. `Mirrored` rolls each axis sign at 50/50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidDrift {
    #[default]
    Positive,
    Mirrored,
}

/// An asteroid in the belt
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: AsteroidTier,
    /// Heading of the first vertex (radians)
    pub angle: f32,
    /// Per-vertex radial offset ratios, fixed at creation
    offsets: Vec<f32>,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, tier: AsteroidTier, angle: f32, offsets: Vec<f32>) -> Self {
        Self {
            pos,
            vel,
            tier,
            angle,
            offsets,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.tier.radius()
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }
}

/// A laser shot fired by the ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cumulative distance travelled (px)
    pub dist: f32,
    /// Ticks left in the impact explosion (0 = flying)
    pub explode_time: u32,
}

impl Laser {
    pub fn is_exploding(&self) -> bool {
        self.explode_time > 0
    }
}

/// Observable lifecycle state of the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipStatus {
    /// Vulnerable and fully visible
    Visible,
    /// Post-spawn invulnerability, rendered with a flicker
    Blinking,
    /// Explosion countdown running
    Exploding,
    /// Out of lives, waiting for the game over text to fade
    Dead,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    pub r: f32,
    /// Heading (radians, 0 = right, counter-clockwise on screen)
    pub angle: f32,
    /// Rotation rate (radians per tick)
    pub rot: f32,
    /// Velocity (px per tick)
    pub vel: Vec2,
    pub thrusting: bool,
    pub can_shoot: bool,
    pub lasers: Vec<Laser>,
    pub dead: bool,
    /// Ticks left in the explosion (0 = not exploding)
    pub explode_time: u32,
    /// Ticks left in the current blink
    pub blink_time: u32,
    /// Blinks left before the ship becomes vulnerable
    pub blink_number: u32,
}

impl Ship {
    /// Fresh ship at `pos`, pointing up and invulnerable
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            r: SHIP_SIZE / 2.0,
            angle: std::f32::consts::FRAC_PI_2,
            rot: 0.0,
            vel: Vec2::ZERO,
            thrusting: false,
            can_shoot: true,
            lasers: Vec::with_capacity(LASER_MAX),
            dead: false,
            explode_time: 0,
            blink_time: secs_to_ticks(SHIP_BLINK_DUR),
            blink_number: (SHIP_INV_DUR / SHIP_BLINK_DUR).ceil() as u32,
        }
    }

    pub fn is_exploding(&self) -> bool {
        self.explode_time > 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.blink_number > 0
    }

    /// Whether the ship is drawn this tick (off on odd blinks)
    pub fn blink_on(&self) -> bool {
        self.blink_number % 2 == 0
    }

    pub fn status(&self) -> ShipStatus {
        if self.dead {
            ShipStatus::Dead
        } else if self.is_exploding() {
            ShipStatus::Exploding
        } else if self.is_invulnerable() {
            ShipStatus::Blinking
        } else {
            ShipStatus::Visible
        }
    }

    /// Unit heading in screen coordinates (y grows downwards)
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), -self.angle.sin())
    }

    /// Tip of the ship, where lasers leave from
    pub fn nose(&self) -> Vec2 {
        self.pos + self.heading() * (4.0 / 3.0 * self.r)
    }

    /// Fire a laser from the nose if the trigger is armed and a slot is free.
    ///
    /// Any attempt disarms the trigger until it is released. Returns whether
    /// a laser was created.
    pub fn shoot(&mut self) -> bool {
        let fired = self.can_shoot && self.lasers.len() < LASER_MAX;
        if fired {
            self.lasers.push(Laser {
                pos: self.nose(),
                vel: self.heading() * (LASER_SPD / FPS as f32),
                dist: 0.0,
                explode_time: 0,
            });
        }
        self.can_shoot = false;
        fired
    }

    /// Start the explosion countdown
    pub fn explode(&mut self) {
        self.explode_time = secs_to_ticks(SHIP_EXPLODE_DUR);
    }
}

/// Discrete events emitted by a tick, consumed by audio/storage/UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    LaserFired,
    AsteroidHit { tier: AsteroidTier },
    ShipExploded,
    ThrustStarted,
    ThrustStopped,
    /// Remaining-asteroid ratio changed (drives the music tempo)
    AsteroidRatio(f32),
    /// Score beat the stored highscore
    HighScore(u64),
    LevelStarted { level: u32 },
    ShipRespawned,
    GameOver,
    /// A brand-new session began; the stored highscore should be reloaded
    NewGame,
}

/// Arena dimensions in px
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Travel distance after which a laser is discarded
    pub fn laser_range(&self) -> f32 {
        LASER_DIST * self.width
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub drift: AsteroidDrift,
    /// Injected random source; every random draw goes through here
    pub rng: Pcg32,
    /// Current level index (0-based)
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    pub highscore: u64,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    /// Asteroid slots left this level (music pacing only)
    pub roids_left: u32,
    pub roids_total: u32,
    /// Status text and its fade alpha
    pub text: String,
    pub text_alpha: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Whether the thruster loop is currently sounding
    pub thrust_sounding: bool,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New session on the default arena with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_rng(
            Pcg32::seed_from_u64(seed),
            Arena::default(),
            AsteroidDrift::default(),
        )
    }

    /// New session with an injected RNG
    pub fn with_rng(rng: Pcg32, arena: Arena, drift: AsteroidDrift) -> Self {
        let mut state = Self {
            arena,
            drift,
            rng,
            level: 0,
            lives: GAME_LIVES,
            score: 0,
            highscore: 0,
            ship: Ship::new(arena.center()),
            asteroids: Vec::new(),
            roids_left: 0,
            roids_total: 0,
            text: String::new(),
            text_alpha: 0.0,
            time_ticks: 0,
            thrust_sounding: false,
            events: Vec::new(),
        };
        state.new_game();
        state
    }

    /// Reset level, lives and score and start level 1.
    ///
    /// The highscore is kept; the host reloads it from its store on
    /// `GameEvent::NewGame`.
    pub fn new_game(&mut self) {
        self.level = 0;
        self.lives = GAME_LIVES;
        self.score = 0;
        self.ship = Ship::new(self.arena.center());
        self.events.push(GameEvent::NewGame);
        log::info!("New game");
        self.new_level();
    }

    /// Show the level banner and populate a fresh belt
    pub fn new_level(&mut self) {
        self.text = format!("LEVEL {}", self.level + 1);
        self.text_alpha = 1.0;

        let count = ROIDS_NUM + self.level;
        self.roids_total = count * ROIDS_PER_BELT_SLOT;
        self.roids_left = self.roids_total;
        self.asteroids = create_belt(
            &mut self.rng,
            self.level,
            self.ship.pos,
            self.ship.r,
            self.arena,
            self.drift,
        );

        log::info!(
            "Level {} started with {} asteroids",
            self.level + 1,
            self.asteroids.len()
        );
        self.events.push(GameEvent::LevelStarted { level: self.level });
    }

    /// Remaining-asteroid ratio for music pacing
    pub fn asteroid_ratio(&self) -> f32 {
        if self.roids_left == 0 || self.roids_total == 0 {
            1.0
        } else {
            self.roids_left as f32 / self.roids_total as f32
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.ship.dead
    }
}
