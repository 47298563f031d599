//! Rendering contract
//!
//! Renderers observe the state after each tick and never mutate it.
//! `scene` reduces a state to a backend-neutral draw list.

pub mod scene;
pub mod shapes;

pub use scene::{DebugOverlays, DrawList, Paint};

use crate::sim::GameState;

/// Frame output contract
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}

/// Headless renderer: logs the HUD whenever it changes
#[derive(Debug, Clone, Default)]
pub struct HudRenderer {
    last_hud: String,
    overlays: DebugOverlays,
    /// Frames drawn so far
    pub frames: u64,
}

impl HudRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlays(overlays: DebugOverlays) -> Self {
        Self {
            overlays,
            ..Self::default()
        }
    }

    fn hud_line(state: &GameState) -> String {
        format!(
            "level {} | lives {} | score {} | highscore {} | asteroids {}",
            state.level + 1,
            state.lives,
            state.score,
            state.highscore,
            state.asteroids.len()
        )
    }
}

impl Renderer for HudRenderer {
    fn draw(&mut self, state: &GameState) {
        self.frames += 1;
        let list = DrawList::build(state, self.overlays);
        log::trace!(
            "frame {}: {} polygons, {} discs, {} texts",
            self.frames,
            list.polygons.len(),
            list.discs.len(),
            list.texts.len()
        );

        let hud = Self::hud_line(state);
        if hud != self.last_hud {
            log::info!("{}", hud);
            self.last_hud = hud;
        }
    }
}
