//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use spawn::{maybe_spawn_coin, maybe_spawn_obstacle};
pub use state::{Coin, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{Intent, TickInput, apply_intent, tick};
