//! Game state and core simulation types
//!
//! The session owns every entity. Nothing here is global; the driver holds
//! a `GameState` and passes it by reference into `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::Result;
use crate::{ground_level, lane_positions};

/// Machine state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Frozen until pause is toggled again or the session is reset
    Paused,
    /// Player hit an obstacle; waiting for a reset
    GameOver,
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Target lane (0..LANE_COUNT)
    pub lane: usize,
    /// Center-x / bottom-y anchor
    pub pos: Vec2,
    /// Vertical velocity (pixels per tick, negative is up)
    pub vel_y: f32,
    pub airborne: bool,
}

impl Player {
    pub fn new(lane: usize, lane_x: f32, ground_y: f32) -> Self {
        debug_assert!(lane < LANE_COUNT, "lane {lane} out of range");
        Self {
            lane,
            pos: Vec2::new(lane_x, ground_y),
            vel_y: 0.0,
            airborne: false,
        }
    }

    pub fn footprint(&self) -> Rect {
        Rect::from_anchor(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Move one lane left, saturating at the first lane. Returns true if the lane changed.
    pub fn shift_left(&mut self) -> bool {
        let lane = self.lane.saturating_sub(1);
        let changed = lane != self.lane;
        self.lane = lane;
        changed
    }

    /// Move one lane right, saturating at the last lane. Returns true if the lane changed.
    pub fn shift_right(&mut self) -> bool {
        let lane = (self.lane + 1).min(LANE_COUNT - 1);
        let changed = lane != self.lane;
        self.lane = lane;
        changed
    }

    /// Take off if grounded. Returns false for a mid-air request.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.vel_y = -impulse;
        true
    }

    /// Exponential approach toward the target lane; never snaps
    pub fn ease_toward(&mut self, target_x: f32) {
        self.pos.x += (target_x - self.pos.x) * LANE_EASING;
    }

    /// One explicit Euler step of the jump arc. Returns true on landing.
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) -> bool {
        if !self.airborne {
            return false;
        }
        self.pos.y += self.vel_y;
        self.vel_y += gravity;
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vel_y = 0.0;
            self.airborne = false;
            return true;
        }
        false
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Short box hugging the ground; blocks a grounded runner
    Low,
    /// Tall box hanging higher up; a grounded runner passes under it
    High,
}

impl ObstacleKind {
    /// Height of the box's bottom edge above the ground line
    pub fn lift(self) -> f32 {
        match self {
            ObstacleKind::Low => 50.0,
            ObstacleKind::High => 100.0,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            ObstacleKind::Low => 50.0,
            ObstacleKind::High => 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Center-x / bottom-y anchor
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Lane it spawned in
    pub lane: usize,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, lane: usize, lane_x: f32, ground_y: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(lane_x, ground_y - kind.lift()),
            width: OBSTACLE_WIDTH,
            height: kind.height(),
            lane,
        }
    }

    pub fn footprint(&self) -> Rect {
        Rect::from_anchor(self.pos, self.width, self.height)
    }

    /// Entirely past the left edge of the playfield
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.width / 2.0 < 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Circle center
    pub pos: Vec2,
    pub radius: f32,
    /// Lane it spawned in
    pub lane: usize,
}

impl Coin {
    pub fn new(lane: usize, lane_x: f32, center_y: f32) -> Self {
        Self {
            pos: Vec2::new(lane_x, center_y),
            radius: COIN_RADIUS,
            lane,
        }
    }

    /// Bounding square of the circle, expressed with the bottom-y anchor
    pub fn footprint(&self) -> Rect {
        let size = self.radius * 2.0;
        Rect::from_anchor(Vec2::new(self.pos.x, self.pos.y + self.radius), size, size)
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.radius < 0.0
    }
}

/// Things that happened during a tick, for audio/UI layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LaneChanged { lane: usize },
    Jumped,
    Landed,
    ObstacleSpawned { lane: usize, kind: ObstacleKind },
    CoinSpawned { lane: usize },
    CoinCollected { lane: usize },
    ObstacleHit { lane: usize, kind: ObstacleKind },
    GameOver { score: f64 },
    Paused,
    Resumed,
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning this session was built with
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current machine state
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live coins in spawn order
    pub coins: Vec<Coin>,
    /// Continuous score accumulator
    pub score: f64,
    /// Scroll speed (pixels per tick)
    pub game_speed: f32,
    /// Current obstacle cadence; ramps down to the configured floor
    pub obstacle_interval_ms: u64,
    /// Coin cadence (constant)
    pub coin_interval_ms: u64,
    pub last_obstacle_ms: u64,
    pub last_coin_ms: u64,
    /// Driver time of the previous tick
    pub last_tick_ms: Option<u64>,
    /// Running ticks survived this session
    pub ticks: u64,
    pub coins_collected: u32,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    lanes: [f32; LANE_COUNT],
    ground_y: f32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let lanes = lane_positions(config.width);
        let ground_y = ground_level(config.height);
        let state = Self {
            seed,
            phase: GamePhase::Running,
            player: Player::new(START_LANE, lanes[START_LANE], ground_y),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0.0,
            game_speed: config.initial_game_speed,
            obstacle_interval_ms: config.initial_obstacle_interval_ms,
            coin_interval_ms: config.initial_coin_interval_ms,
            last_obstacle_ms: 0,
            last_coin_ms: 0,
            last_tick_ms: None,
            ticks: 0,
            coins_collected: 0,
            events: Vec::new(),
            lanes,
            ground_y,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };

        log::info!("Session created with seed {}", seed);
        Ok(state)
    }

    /// Center x of a lane
    #[inline]
    pub fn lane_x(&self, lane: usize) -> f32 {
        debug_assert!(lane < LANE_COUNT, "lane {lane} out of range");
        self.lanes[lane]
    }

    #[inline]
    pub fn lanes(&self) -> [f32; LANE_COUNT] {
        self.lanes
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Score as shown to the player (truncated toward zero)
    #[inline]
    pub fn display_score(&self) -> u64 {
        self.score as u64
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Return to the starting configuration, keeping the player's lane.
    ///
    /// Spawn timestamps and the RNG stream carry over.
    pub fn reset(&mut self) {
        let lane = self.player.lane;
        self.player = Player::new(lane, self.lane_x(lane), self.ground_y);
        self.obstacles.clear();
        self.coins.clear();
        self.score = 0.0;
        self.game_speed = self.config.initial_game_speed;
        self.obstacle_interval_ms = self.config.initial_obstacle_interval_ms;
        self.coin_interval_ms = self.config.initial_coin_interval_ms;
        self.ticks = 0;
        self.coins_collected = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset (lane {})", lane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 1).unwrap()
    }

    #[test]
    fn test_new_session_starts_centered() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.lane, 1);
        assert_eq!(state.player.pos, Vec2::new(400.0, 500.0));
        assert!(!state.player.airborne);
        assert_eq!(state.game_speed, 5.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_player_rejects_unknown_lane() {
        Player::new(LANE_COUNT, 400.0, 500.0);
    }

    #[test]
    #[should_panic]
    fn test_lane_x_rejects_unknown_lane() {
        state().lane_x(LANE_COUNT);
    }

    #[test]
    fn test_lane_shifts_saturate() {
        let mut player = Player::new(0, 200.0, 500.0);
        assert!(!player.shift_left());
        assert_eq!(player.lane, 0);
        assert!(player.shift_right());
        assert!(player.shift_right());
        assert!(!player.shift_right());
        assert_eq!(player.lane, 2);
    }

    #[test]
    fn test_jump_arc_lands_on_ground() {
        let mut player = Player::new(1, 400.0, 500.0);
        assert!(player.jump(15.0));
        assert_eq!(player.vel_y, -15.0);
        assert!(!player.jump(15.0), "no double jump");

        let mut peak = player.pos.y;
        let mut landed = false;
        for _ in 0..100 {
            peak = peak.min(player.pos.y);
            if player.integrate(1.0, 500.0) {
                landed = true;
                break;
            }
            assert!(player.pos.y <= 500.0);
        }
        assert!(landed);
        assert_eq!(player.pos.y, 500.0);
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.airborne);
        assert!(peak < 400.0, "jump should clear 100px, peaked at {peak}");
    }

    #[test]
    fn test_ease_never_snaps() {
        let mut player = Player::new(1, 400.0, 500.0);
        player.shift_left();
        player.ease_toward(200.0);
        assert_eq!(player.pos.x, 380.0);
        for _ in 0..50 {
            player.ease_toward(200.0);
        }
        assert!(player.pos.x > 200.0);
        assert!(player.pos.x < 201.0);
    }

    #[test]
    fn test_low_obstacle_blocks_grounded_player_high_does_not() {
        let state = state();
        let player = state.player.footprint();
        let low = Obstacle::new(ObstacleKind::Low, 1, 400.0, state.ground_y());
        let high = Obstacle::new(ObstacleKind::High, 1, 400.0, state.ground_y());
        assert!(low.footprint().intersects(&player));
        assert!(!high.footprint().intersects(&player));
    }

    #[test]
    fn test_off_screen_uses_right_edge() {
        let mut o = Obstacle::new(ObstacleKind::Low, 0, 200.0, 500.0);
        o.pos.x = -24.0;
        assert!(!o.is_off_screen());
        o.pos.x = -26.0;
        assert!(o.is_off_screen());

        let mut c = Coin::new(0, 200.0, 450.0);
        c.pos.x = -19.0;
        assert!(!c.is_off_screen());
        c.pos.x = -21.0;
        assert!(c.is_off_screen());
    }

    #[test]
    fn test_reset_keeps_lane() {
        let mut state = state();
        state.player.shift_right();
        state.player.pos.x = 450.0;
        state.score = 123.4;
        state.phase = GamePhase::GameOver;
        state.obstacles.push(Obstacle::new(ObstacleKind::Low, 2, 600.0, 500.0));
        state.obstacle_interval_ms = 700;

        state.reset();
        assert_eq!(state.player.lane, 2);
        assert_eq!(state.player.pos.x, 600.0);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.obstacle_interval_ms, 1500);
    }
}
