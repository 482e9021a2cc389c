//! Session configuration
//!
//! Supplied once when a session is built. Loaded from JSON on native;
//! missing fields fall back to the classic tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Tuning values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Fixed simulation rate the driver should tick at
    pub target_tick_rate: u32,

    // === Difficulty ===
    /// Scroll speed at score 0 (pixels per tick)
    pub initial_game_speed: f32,
    /// Score needed to add one pixel per tick of scroll speed
    pub speed_score_divisor: f64,
    /// Score accrued every running tick
    pub score_per_tick: f64,
    /// Score added per collected coin
    pub coin_reward: f64,

    // === Spawning ===
    /// Delay between obstacles at session start
    pub initial_obstacle_interval_ms: u64,
    /// Obstacle delay never ramps below this
    pub min_obstacle_interval_ms: u64,
    /// Obstacle delay shrinks by this much after every obstacle
    pub obstacle_interval_step_ms: u64,
    /// Delay between coins (constant)
    pub initial_coin_interval_ms: u64,

    // === Jump ===
    /// Upward velocity applied on takeoff (pixels per tick)
    pub jump_impulse: f32,
    /// Downward acceleration while airborne (pixels per tick²)
    pub gravity: f32,

    /// RNG seed; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            target_tick_rate: 60,

            initial_game_speed: 5.0,
            speed_score_divisor: 1000.0,
            score_per_tick: 0.1,
            coin_reward: 10.0,

            initial_obstacle_interval_ms: 1500,
            min_obstacle_interval_ms: 500,
            obstacle_interval_step_ms: 10,
            initial_coin_interval_ms: 1000,

            jump_impulse: 15.0,
            gravity: 1.0,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        if self.height <= crate::consts::GROUND_OFFSET {
            return Err(SimError::invalid(
                "height",
                format!("must exceed the ground offset ({})", crate::consts::GROUND_OFFSET),
            ));
        }
        if self.target_tick_rate == 0 {
            return Err(SimError::invalid("target_tick_rate", "must be at least 1"));
        }

        positive("initial_game_speed", self.initial_game_speed)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("gravity", self.gravity)?;

        if !self.speed_score_divisor.is_finite() || self.speed_score_divisor <= 0.0 {
            return Err(SimError::invalid("speed_score_divisor", "must be a positive number"));
        }
        if !self.score_per_tick.is_finite() || self.score_per_tick < 0.0 {
            return Err(SimError::invalid("score_per_tick", "must be zero or positive"));
        }
        if !self.coin_reward.is_finite() || self.coin_reward < 0.0 {
            return Err(SimError::invalid("coin_reward", "must be zero or positive"));
        }

        if self.min_obstacle_interval_ms > self.initial_obstacle_interval_ms {
            return Err(SimError::invalid(
                "min_obstacle_interval_ms",
                format!(
                    "floor {} is above the initial interval {}",
                    self.min_obstacle_interval_ms, self.initial_obstacle_interval_ms
                ),
            ));
        }
        Ok(())
    }

    /// Duration of one tick in milliseconds
    pub fn tick_ms(&self) -> f64 {
        1000.0 / f64::from(self.target_tick_rate.max(1))
    }

    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(field, format!("must be a positive number, got {value}")))
    }
}
