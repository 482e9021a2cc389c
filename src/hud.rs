//! HUD text for text/overlay renderers

use crate::game::Snapshot;
use crate::sim::GamePhase;

pub const GAME_OVER_BANNER: &str = "GAME OVER - Press R to restart";
pub const PAUSED_BANNER: &str = "PAUSED - Press P to resume";

/// Strings a renderer draws on top of the playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub best: String,
    pub banner: Option<&'static str>,
}

impl HudText {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        Self {
            score: score_line(snap.score),
            best: format!("Best: {}", snap.high_score),
            banner: banner(snap.phase),
        }
    }
}

/// Score truncated toward zero
pub fn score_line(score: f64) -> String {
    format!("Score: {}", score as u64)
}

pub fn banner(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Running => None,
        GamePhase::Paused => Some(PAUSED_BANNER),
        GamePhase::GameOver => Some(GAME_OVER_BANNER),
    }
}
