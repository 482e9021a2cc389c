//! Lane Runner - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, state machine)
//! - `game`: Session facade with the high score store and render snapshots
//! - `config`: Data-driven tuning loaded from JSON
//! - `platform`: Raw key/touch translation into intents
//! - `driver`: Fixed timestep accumulator loop
//! - `autopilot`: Demo mode that plays from snapshots

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod highscores;
pub mod hud;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{Result, SimError};
pub use game::{Game, Snapshot};
pub use highscores::{HighScoreEntry, HighScoreStore, HighScores};

/// Game configuration constants
pub mod consts {
    /// Number of lanes on the track
    pub const LANE_COUNT: usize = 3;
    /// Lane the player starts in (center)
    pub const START_LANE: usize = 1;
    /// Fraction of the remaining distance to the target lane covered per tick
    pub const LANE_EASING: f32 = 0.1;

    /// Player ground line, measured up from the bottom of the playfield
    pub const GROUND_OFFSET: f32 = 100.0;

    /// Player footprint
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;

    /// Obstacle footprint width (both kinds)
    pub const OBSTACLE_WIDTH: f32 = 50.0;

    /// Coin radius
    pub const COIN_RADIUS: f32 = 20.0;
    /// Coin center heights above the ground line
    pub const COIN_LIFTS: [f32; 2] = [50.0, 100.0];

    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;
}

/// Lane center x-coordinates for a playfield of the given width
#[inline]
pub fn lane_positions(width: f32) -> [f32; consts::LANE_COUNT] {
    [width / 4.0, width / 2.0, 3.0 * width / 4.0]
}

/// Player ground line for a playfield of the given height
#[inline]
pub fn ground_level(height: f32) -> f32 {
    height - consts::GROUND_OFFSET
}
