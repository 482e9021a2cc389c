//! Error types
//!
//! The simulation itself cannot fail; these cover construction-time
//! configuration problems and drivers that break the tick contract.

use thiserror::Error;

/// Errors surfaced to the driver
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("driver clock went backwards: last tick at {last_ms} ms, now {now_ms} ms")]
    ClockRegressed { last_ms: u64, now_ms: u64 },

    #[error("config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
