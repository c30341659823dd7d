//! Headless demo driver
//!
//! Runs a scripted session at a simulated 60 Hz until game over, logging
//! events as they happen and printing the final snapshot as JSON. Pass a
//! number as the first argument to pick the RNG seed.

use std::env;
use std::process::ExitCode;

use space_raiders::sim::{GameEvent, GamePhase, TickInput};
use space_raiders::{FileScoreStore, Session};

const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() -> ExitCode {
    env_logger::init();

    let seed = match env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("usage: space-raiders [seed]");
                return ExitCode::FAILURE;
            }
        },
        None => 0xC0FFEE,
    };

    let mut session = Session::new(seed, FileScoreStore::new("."));
    log::info!("starting demo run, seed {seed}");

    session.frame(
        &TickInput {
            start: true,
            ..TickInput::default()
        },
        0.0,
    );

    for frame in 1..MAX_FRAMES {
        let now_ms = frame as f64 * FRAME_MS;

        // Hold fire and sweep the ship left and right every two seconds
        let sweep_left = (frame / 120) % 2 == 0;
        let input = TickInput {
            left: sweep_left,
            right: !sweep_left,
            fire_held: true,
            ..TickInput::default()
        };

        for event in session.frame(&input, now_ms) {
            match event {
                GameEvent::EnemyDestroyed { kind, points } => {
                    log::info!("destroyed {kind:?} for {points} points")
                }
                GameEvent::LevelComplete { level } => log::info!("level {level} complete"),
                GameEvent::LevelStarted { level } => log::info!("level {level} started"),
                GameEvent::NewHighScore(score) => log::info!("new high score {score}"),
                other => log::debug!("{other:?}"),
            }
        }

        if session.state.phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = session.snapshot(MAX_FRAMES as f64 * FRAME_MS);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("snapshot serialization failed: {err}");
            ExitCode::FAILURE
        }
    }
}
