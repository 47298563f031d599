//! Backend-neutral draw list for one frame
//!
//! Decides *what* is visible this tick (blink flicker, explosions, thruster,
//! fading text) so a concrete backend only has to stroke and fill.

use glam::Vec2;

use super::shapes::{
    LASER_DOT_RADIUS, LASER_EXPLOSION_RINGS, SHIP_EXPLOSION_RINGS, asteroid_outline, lives_icons,
    ship_outline, thruster_flame,
};
use crate::consts::SHIP_SIZE;
use crate::sim::{GameState, ShipStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Ship,
    /// The life icon that is being spent (ship exploding)
    ShipLosing,
    Thruster,
    Asteroid,
    Laser,
    Explosion,
    /// Collision circle, stroked rather than filled
    Bounding,
    CentreDot,
}

/// Debug overlays drawn on top of the normal frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugOverlays {
    /// Collision circles of the ship and every asteroid
    pub bounding: bool,
    /// Dot at the ship's centre
    pub centre_dot: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
    pub paint: Paint,
    pub filled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Centred status text (level banner, game over)
    Status,
    /// Top right score
    Score,
    /// Top centre highscore
    Highscore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub alpha: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub polygons: Vec<Polygon>,
    pub discs: Vec<Disc>,
    pub texts: Vec<Text>,
}

impl DrawList {
    /// Build the draw list for the current state
    pub fn build(state: &GameState, overlays: DebugOverlays) -> Self {
        let mut list = DrawList::default();
        let ship = &state.ship;
        let status = ship.status();

        match status {
            ShipStatus::Exploding => {
                for scale in SHIP_EXPLOSION_RINGS {
                    list.discs.push(Disc {
                        center: ship.pos,
                        radius: ship.r * scale,
                        paint: Paint::Explosion,
                    });
                }
            }
            ShipStatus::Visible | ShipStatus::Blinking if ship.blink_on() => {
                if ship.thrusting {
                    list.polygons.push(Polygon {
                        points: thruster_flame(ship).to_vec(),
                        paint: Paint::Thruster,
                        filled: true,
                    });
                }
                list.polygons.push(Polygon {
                    points: ship_outline(ship.pos, ship.angle, ship.r).to_vec(),
                    paint: Paint::Ship,
                    filled: false,
                });
            }
            _ => {}
        }

        for roid in &state.asteroids {
            list.polygons.push(Polygon {
                points: asteroid_outline(roid),
                paint: Paint::Asteroid,
                filled: false,
            });
        }

        if overlays.bounding {
            list.discs.push(Disc {
                center: ship.pos,
                radius: ship.r,
                paint: Paint::Bounding,
            });
            for roid in &state.asteroids {
                list.discs.push(Disc {
                    center: roid.pos,
                    radius: roid.radius(),
                    paint: Paint::Bounding,
                });
            }
        }
        if overlays.centre_dot {
            list.discs.push(Disc {
                center: ship.pos,
                radius: 1.0,
                paint: Paint::CentreDot,
            });
        }

        for laser in &ship.lasers {
            if laser.is_exploding() {
                for scale in LASER_EXPLOSION_RINGS {
                    list.discs.push(Disc {
                        center: laser.pos,
                        radius: ship.r * scale,
                        paint: Paint::Explosion,
                    });
                }
            } else {
                list.discs.push(Disc {
                    center: laser.pos,
                    radius: LASER_DOT_RADIUS,
                    paint: Paint::Laser,
                });
            }
        }

        let arena = state.arena;
        if state.text_alpha >= 0.0 {
            list.texts.push(Text {
                content: state.text.clone(),
                pos: Vec2::new(arena.width / 2.0, arena.height * 0.75),
                anchor: Anchor::Status,
                alpha: state.text_alpha,
            });
        }

        let icons = lives_icons(state.lives);
        let last = icons.len().saturating_sub(1);
        for (i, center) in icons.into_iter().enumerate() {
            let paint = if status == ShipStatus::Exploding && i == last {
                Paint::ShipLosing
            } else {
                Paint::Ship
            };
            list.polygons.push(Polygon {
                points: ship_outline(center, std::f32::consts::FRAC_PI_2, SHIP_SIZE / 2.0).to_vec(),
                paint,
                filled: false,
            });
        }

        list.texts.push(Text {
            content: state.score.to_string(),
            pos: Vec2::new(arena.width - SHIP_SIZE / 2.0, SHIP_SIZE),
            anchor: Anchor::Score,
            alpha: 1.0,
        });
        list.texts.push(Text {
            content: format!("Highscore: {}", state.highscore),
            pos: Vec2::new(arena.width / 2.0, SHIP_SIZE),
            anchor: Anchor::Highscore,
            alpha: 1.0,
        });

        list
    }

    pub fn count(&self, paint: Paint) -> usize {
        self.polygons.iter().filter(|p| p.paint == paint).count()
            + self.discs.iter().filter(|d| d.paint == paint).count()
    }
}
