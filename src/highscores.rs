//! High score leaderboard
//!
//! Lives for the process lifetime only. Sessions report to it through the
//! `HighScoreStore` trait so drivers can swap in their own store.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Displayed (truncated) score
    pub score: u64,
    /// Running ticks survived
    pub ticks: u64,
    pub coins: u32,
}

/// Where finished sessions report their score
pub trait HighScoreStore {
    /// Best score recorded so far (0 when empty)
    fn best(&self) -> u64;

    /// Record a finished session. Returns the rank achieved (1-indexed), if any.
    fn submit(&mut self, entry: HighScoreEntry) -> Option<usize>;
}

/// In-memory top-N leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Must beat the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new entry (if it qualifies). Returns the rank achieved.
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        // Ties go below existing entries
        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

impl HighScoreStore for HighScores {
    fn best(&self) -> u64 {
        self.top_score().unwrap_or(0)
    }

    fn submit(&mut self, entry: HighScoreEntry) -> Option<usize> {
        self.add(entry)
    }
}
