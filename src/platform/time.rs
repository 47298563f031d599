//! Fixed-rate timing
//!
//! Converts variable wall-clock frame times into a whole number of fixed
//! simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulator for a fixed timestep loop
#[derive(Debug, Clone, Default)]
pub struct FixedTimestep {
    accumulator: f32,
}

impl FixedTimestep {
    /// Longest frame accepted; longer stalls are clamped
    const MAX_FRAME: f32 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds of wall time and return how many ticks to run.
    ///
    /// At most `MAX_SUBSTEPS` ticks are returned per call to prevent a spiral
    /// of death; leftover time beyond that is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, Self::MAX_FRAME);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }

    /// Time until the next tick is due, in seconds
    pub fn until_next(&self) -> f32 {
        (SIM_DT - self.accumulator).max(0.0)
    }
}
