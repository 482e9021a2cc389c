//! Fixed timestep driver
//!
//! Turns variable frame deltas into whole simulation ticks and keeps the
//! monotonic millisecond clock the spawner compares against.

use crate::config::GameConfig;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::error::Result;
use crate::game::{Game, Snapshot};
use crate::highscores::HighScoreStore;
use crate::sim::{Intent, TickInput};

/// Accumulator loop feeding a `Game`
#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    step_secs: f64,
    accumulator: f64,
    elapsed_ms: f64,
    pending: TickInput,
}

impl FixedStepDriver {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            step_secs: config.tick_ms() / 1000.0,
            accumulator: 0.0,
            elapsed_ms: 0.0,
            pending: TickInput::new(),
        }
    }

    /// Queue an intent for the next tick
    pub fn queue(&mut self, intent: Intent) {
        self.pending.push(intent);
    }

    /// Simulation clock handed to the last tick
    pub fn now_ms(&self) -> u64 {
        self.elapsed_ms as u64
    }

    /// Feed one frame's worth of wall time. Returns the snapshot of the last
    /// tick run, or `None` if the frame was too short for a whole tick.
    pub fn advance<S: HighScoreStore>(
        &mut self,
        game: &mut Game<S>,
        frame_dt: f64,
    ) -> Result<Option<Snapshot>> {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut snapshot = None;
        let mut substeps = 0;
        while self.accumulator >= self.step_secs && substeps < MAX_SUBSTEPS {
            self.elapsed_ms += self.step_secs * 1000.0;
            snapshot = Some(game.tick(self.now_ms(), &self.pending)?);
            self.accumulator -= self.step_secs;
            substeps += 1;

            // One-shot inputs only apply to the first substep
            self.pending.clear();
        }

        // Drop the backlog the substep cap left behind
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step_secs);
        }
        Ok(snapshot)
    }
}
