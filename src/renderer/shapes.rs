//! Outline geometry for the ship, thruster and asteroids
//!
//! Screen coordinates: y grows downwards, headings are counter-clockwise.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::SHIP_SIZE;
use crate::sim::{Asteroid, Ship};

/// Ship triangle: nose, rear left, rear right
pub fn ship_outline(pos: Vec2, angle: f32, r: f32) -> [Vec2; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        Vec2::new(pos.x + 4.0 / 3.0 * r * cos, pos.y - 4.0 / 3.0 * r * sin),
        Vec2::new(
            pos.x - r * (2.0 / 3.0 * cos + sin),
            pos.y + r * (2.0 / 3.0 * sin - cos),
        ),
        Vec2::new(
            pos.x - r * (2.0 / 3.0 * cos - sin),
            pos.y + r * (2.0 / 3.0 * sin + cos),
        ),
    ]
}

/// Thruster flame behind the ship: rear left, tip, rear right
pub fn thruster_flame(ship: &Ship) -> [Vec2; 3] {
    let (sin, cos) = ship.angle.sin_cos();
    let (pos, r) = (ship.pos, ship.r);
    [
        Vec2::new(
            pos.x - r * (2.0 / 3.0 * cos + 0.5 * sin),
            pos.y + r * (2.0 / 3.0 * sin - 0.5 * cos),
        ),
        Vec2::new(pos.x - r * 2.0 * cos, pos.y + r * 2.0 * sin),
        Vec2::new(
            pos.x - r * (2.0 / 3.0 * cos - 0.5 * sin),
            pos.y + r * (2.0 / 3.0 * sin + 0.5 * cos),
        ),
    ]
}

/// Jagged closed polygon of an asteroid, one point per vertex offset
pub fn asteroid_outline(roid: &Asteroid) -> Vec<Vec2> {
    let vert = roid.vertex_count();
    let r = roid.radius();
    roid.offsets()
        .iter()
        .enumerate()
        .map(|(j, off)| {
            let a = roid.angle + j as f32 * TAU / vert as f32;
            roid.pos + Vec2::new(a.cos(), a.sin()) * (r * off)
        })
        .collect()
}

/// Concentric explosion discs around the ship, outermost first (radius scale)
pub const SHIP_EXPLOSION_RINGS: [f32; 5] = [1.7, 1.4, 1.1, 0.8, 0.5];

/// Laser impact discs, outermost first (ship radius scale)
pub const LASER_EXPLOSION_RINGS: [f32; 3] = [0.75, 0.5, 0.25];

/// Radius of a flying laser dot
pub const LASER_DOT_RADIUS: f32 = SHIP_SIZE / 15.0;

/// Centres of the lives icons along the top-left of the HUD
pub fn lives_icons(lives: u32) -> Vec<Vec2> {
    (0..lives)
        .map(|i| Vec2::new(SHIP_SIZE + i as f32 * SHIP_SIZE * 1.2, SHIP_SIZE))
        .collect()
}
