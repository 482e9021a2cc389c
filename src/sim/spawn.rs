//! Time-gated procedural spawning
//!
//! Obstacles ramp their cadence down toward a floor as the session goes on;
//! coins keep a constant cadence.

use rand::Rng;

use super::state::{Coin, GameEvent, GameState, Obstacle, ObstacleKind};
use crate::consts::{COIN_LIFTS, LANE_COUNT};

/// Spawn an obstacle if more than the current interval has passed since the last one.
///
/// Returns true when an obstacle was added.
pub fn maybe_spawn_obstacle(now_ms: u64, state: &mut GameState) -> bool {
    if now_ms.saturating_sub(state.last_obstacle_ms) <= state.obstacle_interval_ms {
        return false;
    }

    let rng = state.rng();
    let lane = rng.random_range(0..LANE_COUNT);
    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Low
    } else {
        ObstacleKind::High
    };

    let obstacle = Obstacle::new(kind, lane, state.lane_x(lane), state.ground_y());
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleSpawned { lane, kind });
    state.last_obstacle_ms = now_ms;

    let floor = state.config.min_obstacle_interval_ms;
    state.obstacle_interval_ms = state
        .obstacle_interval_ms
        .saturating_sub(state.config.obstacle_interval_step_ms)
        .max(floor);

    log::debug!(
        "Spawned {:?} obstacle in lane {} (next interval {} ms)",
        kind,
        lane,
        state.obstacle_interval_ms
    );
    true
}

/// Spawn a coin if more than the coin interval has passed since the last one.
///
/// Returns true when a coin was added.
pub fn maybe_spawn_coin(now_ms: u64, state: &mut GameState) -> bool {
    if now_ms.saturating_sub(state.last_coin_ms) <= state.coin_interval_ms {
        return false;
    }

    let rng = state.rng();
    let lane = rng.random_range(0..LANE_COUNT);
    let lift = COIN_LIFTS[rng.random_range(0..COIN_LIFTS.len())];

    let coin = Coin::new(lane, state.lane_x(lane), state.ground_y() - lift);
    state.coins.push(coin);
    state.events.push(GameEvent::CoinSpawned { lane });
    state.last_coin_ms = now_ms;

    log::debug!("Spawned coin in lane {} at lift {}", lane, lift);
    true
}
