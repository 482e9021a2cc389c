//! Idle/demo mode - plays the game from snapshots
//!
//! Entities scroll right to left across every lane, so a low obstacle
//! threatens each lane whose center it has not yet passed. The pilot drifts
//! toward the lane with the fewest pending low obstacles and hops for coins
//! that hang above a grounded runner, unless a high obstacle is within reach.

use crate::config::GameConfig;
use crate::consts::{LANE_COUNT, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::game::Snapshot;
use crate::lane_positions;
use crate::sim::{GamePhase, Intent, ObstacleKind};

/// Horizontal distance ahead of the player the pilot reacts to
const REACH: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    lanes: [f32; LANE_COUNT],
}

impl Autopilot {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lanes: lane_positions(config.width),
        }
    }

    /// Pick this tick's intent
    pub fn decide(&self, snap: &Snapshot) -> Intent {
        if snap.phase != GamePhase::Running {
            return Intent::None;
        }

        let lane = snap.player.lane;
        let target = self.safest_lane(snap, lane);
        if target < lane {
            return Intent::MoveLeft;
        }
        if target > lane {
            return Intent::MoveRight;
        }

        if !snap.player.airborne && self.coin_overhead(snap) && !self.high_obstacle_near(snap) {
            return Intent::Jump;
        }
        Intent::None
    }

    /// Low obstacles that still have to sweep past a lane center
    fn pending_threats(&self, snap: &Snapshot, lane: usize) -> usize {
        let edge = self.lanes[lane] - PLAYER_WIDTH / 2.0;
        snap.obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Low && o.footprint().right() > edge)
            .count()
    }

    /// Lane with the fewest threats; the current lane wins ties
    fn safest_lane(&self, snap: &Snapshot, current: usize) -> usize {
        let mut best = current;
        let mut best_threats = self.pending_threats(snap, current);
        for lane in 0..LANE_COUNT {
            let threats = self.pending_threats(snap, lane);
            if threats < best_threats {
                best = lane;
                best_threats = threats;
            }
        }
        best
    }

    fn in_reach(&self, snap: &Snapshot, left: f32, right: f32) -> bool {
        let x = snap.player.pos.x;
        left < x + PLAYER_WIDTH / 2.0 + REACH && right > x - PLAYER_WIDTH / 2.0
    }

    /// A coin a grounded runner would pass under
    fn coin_overhead(&self, snap: &Snapshot) -> bool {
        let head = snap.ground_y - PLAYER_HEIGHT;
        snap.coins.iter().any(|c| {
            let r = c.footprint();
            r.bottom() <= head && self.in_reach(snap, r.left(), r.right())
        })
    }

    fn high_obstacle_near(&self, snap: &Snapshot) -> bool {
        snap.obstacles.iter().any(|o| {
            let r = o.footprint();
            o.kind == ObstacleKind::High && self.in_reach(snap, r.left(), r.right())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::sim::{Coin, Obstacle};

    fn game() -> Game {
        let config = GameConfig {
            seed: Some(11),
            ..Default::default()
        };
        let mut game = Game::new(config).unwrap();
        game.state_mut().last_obstacle_ms = u64::MAX / 2;
        game.state_mut().last_coin_ms = u64::MAX / 2;
        game
    }

    #[test]
    fn test_idle_when_not_running() {
        let mut game = game();
        let pilot = Autopilot::new(game.config());
        let snap = game.tick(16, &Intent::TogglePause.into()).unwrap();
        assert_eq!(pilot.decide(&snap), Intent::None);
    }

    #[test]
    fn test_empty_field_holds_lane() {
        let game = game();
        let pilot = Autopilot::new(game.config());
        assert_eq!(pilot.decide(&game.snapshot()), Intent::None);
    }

    #[test]
    fn test_moves_away_from_incoming_low_obstacle() {
        let mut game = game();
        let pilot = Autopilot::new(game.config());
        let ground = game.state().ground_y();
        game.state_mut()
            .obstacles
            .push(Obstacle::new(ObstacleKind::Low, 2, 500.0, ground));
        // Center lane is still ahead of it; the right lane is already clear
        assert_eq!(pilot.decide(&game.snapshot()), Intent::MoveRight);
    }

    #[test]
    fn test_jumps_for_overhead_coin() {
        let mut game = game();
        let pilot = Autopilot::new(game.config());
        let ground = game.state().ground_y();
        game.state_mut().coins.push(Coin::new(1, 430.0, ground - 100.0));
        assert_eq!(pilot.decide(&game.snapshot()), Intent::Jump);

        game.state_mut()
            .obstacles
            .push(Obstacle::new(ObstacleKind::High, 1, 450.0, ground));
        assert_eq!(pilot.decide(&game.snapshot()), Intent::None);
    }
}
