//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be deterministic:
//! - One tick per host frame, gated only on the supplied wall clock
//! - Seeded RNG only
//! - Stable iteration order (store order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod spawn;
pub mod state;
pub mod tick;

pub use levels::{LEVELS, LevelConfig, config_for_level};
pub use state::{
    Bullet, Enemy, EnemyKind, GameEvent, GamePhase, GameState, Player, PlayerView, PowerUp,
    PowerUpKind, Snapshot,
};
pub use tick::{TickInput, tick};
