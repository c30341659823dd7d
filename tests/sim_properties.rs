//! Property tests over whole-session behavior
//!
//! These drive the public API only: seeded sessions, random input scripts,
//! and invariants that must hold on every reachable state.

use proptest::prelude::*;

use space_raiders::consts::{
    ARENA_HEIGHT, ARENA_WIDTH, PLAYER_MAX_HEALTH, PLAYER_SIZE, START_LIVES,
};
use space_raiders::sim::{GamePhase, GameState, LEVELS, TickInput, tick};
use space_raiders::{MemoryScoreStore, Session};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn start_input() -> TickInput {
    TickInput {
        start: true,
        ..TickInput::default()
    }
}

/// Random in-game inputs: movement and firing, never session controls.
fn play_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down, fire_pressed, fire_held)| TickInput {
            left,
            right,
            up,
            down,
            fire_pressed,
            fire_held,
            ..TickInput::default()
        },
    )
}

proptest! {
    #[test]
    fn core_invariants_hold_under_any_input_script(
        seed in any::<u64>(),
        script in proptest::collection::vec(play_input(), 1..300),
    ) {
        let mut state = GameState::new(seed, 0);
        tick(&mut state, &start_input(), 0.0);

        let mut last_score = 0;
        for (frame, input) in script.iter().enumerate() {
            tick(&mut state, input, (frame + 1) as f64 * FRAME_MS);

            prop_assert!(state.score >= last_score);
            last_score = state.score;

            prop_assert!(state.player.health <= PLAYER_MAX_HEALTH);
            prop_assert!(state.lives <= START_LIVES);
            prop_assert!(state.level >= 1 && state.level as usize <= LEVELS.len());

            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= ARENA_WIDTH - PLAYER_SIZE);
            prop_assert!(state.player.pos.y >= 0.0);
            prop_assert!(state.player.pos.y <= ARENA_HEIGHT - PLAYER_SIZE);

            for enemy in &state.enemies {
                prop_assert!(enemy.health >= 1);
                prop_assert!(enemy.health <= enemy.max_health);
            }

            if state.phase == GamePhase::GameOver {
                prop_assert_eq!(state.lives, 0);
                break;
            }
        }
    }

    #[test]
    fn identical_seeds_and_scripts_replay_identically(
        seed in any::<u64>(),
        script in proptest::collection::vec(play_input(), 1..120),
    ) {
        let mut a = GameState::new(seed, 0);
        let mut b = GameState::new(seed, 0);
        let events_a = tick(&mut a, &start_input(), 0.0);
        let events_b = tick(&mut b, &start_input(), 0.0);
        prop_assert_eq!(events_a, events_b);

        for (frame, input) in script.iter().enumerate() {
            let now = (frame + 1) as f64 * FRAME_MS;
            let events_a = tick(&mut a, input, now);
            let events_b = tick(&mut b, input, now);
            prop_assert_eq!(events_a, events_b);
            prop_assert_eq!(a.snapshot(now), b.snapshot(now));
        }
    }

    #[test]
    fn paused_sessions_are_frozen(
        seed in any::<u64>(),
        warmup in 1usize..120,
        script in proptest::collection::vec(play_input(), 1..60),
    ) {
        let mut state = GameState::new(seed, 0);
        tick(&mut state, &start_input(), 0.0);
        for frame in 0..warmup {
            tick(&mut state, &TickInput::default(), (frame + 1) as f64 * FRAME_MS);
        }
        prop_assume!(state.phase == GamePhase::Playing);

        let pause = TickInput {
            pause: true,
            ..TickInput::default()
        };
        tick(&mut state, &pause, (warmup + 1) as f64 * FRAME_MS);
        prop_assert_eq!(state.phase, GamePhase::Paused);

        let frozen = state.clone();
        for (i, input) in script.iter().enumerate() {
            tick(&mut state, input, (warmup + 2 + i) as f64 * FRAME_MS);
            prop_assert_eq!(&state.player, &frozen.player);
            prop_assert_eq!(&state.bullets, &frozen.bullets);
            prop_assert_eq!(&state.enemies, &frozen.enemies);
            prop_assert_eq!(&state.powerups, &frozen.powerups);
            prop_assert_eq!(state.score, frozen.score);
        }
    }

    #[test]
    fn persisted_high_score_is_the_running_max(
        scores in proptest::collection::vec(0u32..100_000, 1..8),
    ) {
        let mut store = MemoryScoreStore::new();
        let mut best = 0;

        for (run, &score) in scores.iter().enumerate() {
            let mut session = Session::new(run as u64, store);
            prop_assert_eq!(session.state.high_score, best);

            session.frame(&start_input(), 0.0);
            session.state.level = LEVELS.len() as u32;
            session.state.score = score;
            session.state.lives = 1;
            session.state.player.health = 0;
            session.frame(&TickInput::default(), FRAME_MS);

            prop_assert_eq!(session.state.phase, GamePhase::GameOver);
            best = best.max(score);
            prop_assert_eq!(session.state.high_score, best);
            store = session.into_store();
        }
    }
}
