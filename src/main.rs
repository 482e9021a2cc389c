//! Lane Runner entry point
//!
//! Headless native driver: loads a config, lets the autopilot play one
//! session through the fixed-step driver and prints a JSON summary.
//!
//! Usage: `lane-runner [config.json] [max_ticks]`

use lane_runner::autopilot::Autopilot;
use lane_runner::driver::FixedStepDriver;
use lane_runner::hud::HudText;
use lane_runner::sim::GamePhase;
use lane_runner::{Game, GameConfig};

/// Two minutes at the default rate
const DEFAULT_MAX_TICKS: u64 = 60 * 120;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> lane_runner::Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let max_ticks = match args.next() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring tick limit {:?}, using {}", raw, DEFAULT_MAX_TICKS);
            DEFAULT_MAX_TICKS
        }),
        None => DEFAULT_MAX_TICKS,
    };

    log::info!("Lane Runner (native) starting...");
    let mut game = Game::new(config.clone())?;
    let mut driver = FixedStepDriver::new(&config);
    let pilot = Autopilot::new(&config);
    let frame_dt = 1.0 / f64::from(config.target_tick_rate);

    let mut snapshot = game.snapshot();
    for _ in 0..max_ticks {
        driver.queue(pilot.decide(&snapshot));
        if let Some(next) = driver.advance(&mut game, frame_dt)? {
            snapshot = next;
        }
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
    }

    let hud = HudText::from_snapshot(&snapshot);
    log::info!(
        "{} | {} | {}",
        hud.score,
        hud.best,
        hud.banner.unwrap_or("time limit reached")
    );

    let summary = serde_json::json!({
        "seed": game.state().seed,
        "phase": snapshot.phase,
        "score": snapshot.display_score,
        "high_score": snapshot.high_score,
        "ticks": snapshot.ticks,
        "coins": snapshot.coins_collected,
        "final_speed": snapshot.game_speed,
        "obstacle_interval_ms": snapshot.obstacle_interval_ms,
        "clock_ms": driver.now_ms(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
