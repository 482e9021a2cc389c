//! Session facade
//!
//! Pairs a `GameState` with the high score store and hands the driver a
//! read-only snapshot after every tick.

use serde::Serialize;

use crate::config::GameConfig;
use crate::error::Result;
use crate::highscores::{HighScoreEntry, HighScoreStore, HighScores};
use crate::sim::{Coin, GameEvent, GamePhase, GameState, Obstacle, Player, TickInput, tick};

/// Read-only view of a session for renderers, audio and HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    /// Raw accumulator
    pub score: f64,
    /// Truncated score for display
    pub display_score: u64,
    pub high_score: u64,
    pub game_speed: f32,
    pub obstacle_interval_ms: u64,
    pub ticks: u64,
    pub coins_collected: u32,
    /// Ground line the player stands on
    pub ground_y: f32,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState, high_score: u64) -> Self {
        Self {
            phase: state.phase,
            player: state.player,
            obstacles: state.obstacles.clone(),
            coins: state.coins.clone(),
            score: state.score,
            display_score: state.display_score(),
            high_score,
            game_speed: state.game_speed,
            obstacle_interval_ms: state.obstacle_interval_ms,
            ticks: state.ticks,
            coins_collected: state.coins_collected,
            ground_y: state.ground_y(),
            events: state.events.clone(),
        }
    }
}

/// One playable session plus the store its final scores go to
pub struct Game<S: HighScoreStore = HighScores> {
    state: GameState,
    high_scores: S,
}

impl Game<HighScores> {
    /// Build a session with a fresh in-memory leaderboard
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_store(config, HighScores::new())
    }
}

impl<S: HighScoreStore> Game<S> {
    /// Build a session reporting to the given store. Draws a random seed when the config has none.
    pub fn with_store(config: GameConfig, high_scores: S) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let state = GameState::new(config, seed)?;
        Ok(Self { state, high_scores })
    }

    /// Advance one fixed step and return what the renderer should draw
    pub fn tick(&mut self, now_ms: u64, input: &TickInput) -> Result<Snapshot> {
        tick(&mut self.state, input, now_ms)?;

        let finished = self
            .state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }));
        if finished {
            self.record_score();
        }
        Ok(self.snapshot())
    }

    /// Unconditionally return to the starting configuration
    pub fn reset(&mut self) {
        // Events from the tick that ended the run no longer apply
        self.state.events.clear();
        self.state.reset();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.high_scores.best())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn high_scores(&self) -> &S {
        &self.high_scores
    }

    fn record_score(&mut self) {
        let previous_best = self.high_scores.best();
        let entry = HighScoreEntry {
            score: self.state.display_score(),
            ticks: self.state.ticks,
            coins: self.state.coins_collected,
        };
        let score = entry.score;
        match self.high_scores.submit(entry) {
            Some(1) if score > previous_best => {
                log::info!("New high score: {} (previous {})", score, previous_best);
            }
            Some(rank) => log::info!("Score {} ranked #{}", score, rank),
            None => log::debug!("Score {} did not make the leaderboard", score),
        }
    }
}
