//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session one step: intents through the
//! state machine first, then kinematics, spawning, scrolling, collisions
//! and the difficulty curve.

use serde::{Deserialize, Serialize};

use super::spawn::{maybe_spawn_coin, maybe_spawn_obstacle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::error::{Result, SimError};

/// Pre-decoded player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Jump,
    TogglePause,
    RequestReset,
    #[default]
    None,
}

/// Intents gathered since the previous tick, applied in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        if intent != Intent::None {
            self.intents.push(intent);
        }
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }
}

impl From<Intent> for TickInput {
    fn from(intent: Intent) -> Self {
        let mut input = Self::new();
        input.push(intent);
        input
    }
}

impl FromIterator<Intent> for TickInput {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        let mut input = Self::new();
        for intent in iter {
            input.push(intent);
        }
        input
    }
}

/// Advance the session by one fixed step at driver time `now_ms`.
///
/// `now_ms` must never decrease between calls.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Result<()> {
    if let Some(last_ms) = state.last_tick_ms {
        if now_ms < last_ms {
            log::warn!("Rejected tick: clock went from {} ms to {} ms", last_ms, now_ms);
            return Err(SimError::ClockRegressed { last_ms, now_ms });
        }
    }
    state.last_tick_ms = Some(now_ms);
    state.events.clear();

    for &intent in &input.intents {
        apply_intent(state, intent);
    }

    if state.phase == GamePhase::Running {
        step(state, now_ms);
    }
    Ok(())
}

/// Run one intent through the state machine. Transitions take effect immediately.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match (state.phase, intent) {
        (_, Intent::None) => {}

        (GamePhase::Running, Intent::TogglePause) => {
            state.phase = GamePhase::Paused;
            state.events.push(GameEvent::Paused);
            log::debug!("Paused");
        }
        (GamePhase::Paused, Intent::TogglePause) => {
            state.phase = GamePhase::Running;
            state.events.push(GameEvent::Resumed);
            log::debug!("Resumed");
        }

        (GamePhase::Paused | GamePhase::GameOver, Intent::RequestReset) => state.reset(),

        (GamePhase::Running, Intent::MoveLeft) => {
            if state.player.shift_left() {
                state.events.push(GameEvent::LaneChanged {
                    lane: state.player.lane,
                });
            }
        }
        (GamePhase::Running, Intent::MoveRight) => {
            if state.player.shift_right() {
                state.events.push(GameEvent::LaneChanged {
                    lane: state.player.lane,
                });
            }
        }
        (GamePhase::Running, Intent::Jump) => {
            if state.player.jump(state.config.jump_impulse) {
                state.events.push(GameEvent::Jumped);
            }
        }

        // Reset while running, pause while over, and movement outside Running
        _ => {}
    }
}

/// The running-phase update
fn step(state: &mut GameState, now_ms: u64) {
    // Player kinematics
    let target_x = state.lane_x(state.player.lane);
    state.player.ease_toward(target_x);
    if state.player.integrate(state.config.gravity, state.ground_y()) {
        state.events.push(GameEvent::Landed);
    }

    maybe_spawn_obstacle(now_ms, state);
    maybe_spawn_coin(now_ms, state);

    let player_box = state.player.footprint();
    let speed = state.game_speed;

    // Obstacles: a hit ends the session but the rest of the tick still runs
    let mut hit = None;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.pos.x -= speed;
        if obstacle.footprint().intersects(&player_box) {
            hit.get_or_insert((obstacle.lane, obstacle.kind));
            return true;
        }
        !obstacle.is_off_screen()
    });

    // Coins
    let mut collected = Vec::new();
    state.coins.retain_mut(|coin| {
        coin.pos.x -= speed;
        if coin.footprint().intersects(&player_box) {
            collected.push(coin.lane);
            return false;
        }
        !coin.is_off_screen()
    });
    for lane in collected {
        state.score += state.config.coin_reward;
        state.coins_collected += 1;
        state.events.push(GameEvent::CoinCollected { lane });
    }

    // Difficulty curve: scroll speed follows score
    state.score += state.config.score_per_tick;
    state.game_speed = state.config.initial_game_speed
        + (state.score / state.config.speed_score_divisor) as f32;
    state.ticks += 1;

    if let Some((lane, kind)) = hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::ObstacleHit { lane, kind });
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: hit {:?} obstacle from lane {} with score {}",
            kind,
            lane,
            state.display_score()
        );
    }
}
