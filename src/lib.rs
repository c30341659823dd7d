//! Space Raiders - an arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (movement, spawning, collisions,
//!   scoring, level progression)
//! - `session`: Frame driver gluing the sim to host input and the score store
//! - `highscore`: Persisted high-score port
//!
//! Rendering and input collection are collaborators, not part of this crate: the
//! host feeds a [`sim::TickInput`] in once per display refresh and reads a
//! [`sim::Snapshot`] back out. All timed effects are gated on the wall-clock
//! `now_ms` the host supplies with each tick.

pub mod highscore;
pub mod session;
pub mod sim;

pub use highscore::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use session::Session;

/// Game tuning constants
///
/// Positions are arena units with the origin at the top-left and +y pointing
/// down; durations are wall-clock milliseconds.
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 60.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: u8 = 100;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    pub const START_LIVES: u8 = 3;
    /// Offset from the ship's top-left corner to its collision center
    pub const PLAYER_CENTER: f32 = 30.0;
    /// Extra reach added to the enemy hit radius for ship contact
    pub const PLAYER_HIT_PAD: f32 = 20.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 8.0;
    /// Muzzle offset from the ship's top-left corner
    pub const BULLET_OFFSET_X: f32 = 28.0;
    pub const BULLET_OFFSET_Y: f32 = -10.0;
    /// Bullets are culled once above this y
    pub const BULLET_CULL_Y: f32 = -20.0;

    /// Enemies enter above the visible arena and are culled this far below it
    pub const ENEMY_SPAWN_Y: f32 = -50.0;
    pub const ENEMY_CULL_MARGIN: f32 = 100.0;

    /// Power-up defaults
    pub const POWERUP_SIZE: f32 = 40.0;
    pub const POWERUP_FALL_SPEED: f32 = 2.0;
    pub const POWERUP_SPAWN_Y: f32 = -40.0;
    pub const POWERUP_CULL_MARGIN: f32 = 40.0;
    /// Offset from a power-up's top-left corner to its collision center
    pub const POWERUP_CENTER: f32 = 20.0;
    /// Pickup distance between ship center and power-up center
    pub const PICKUP_RADIUS: f32 = 35.0;
    /// Flat spawn gate rolled after the per-kind drop chance
    pub const POWERUP_SPAWN_CHANCE: f32 = 0.15;
    /// Health restored by a health power-up (capped at max health)
    pub const HEALTH_RESTORE: u8 = 40;

    /// Buff durations (wall-clock ms)
    pub const RAPID_FIRE_MS: f64 = 8_000.0;
    pub const SHIELD_MS: f64 = 10_000.0;

    /// Fire cooldowns (wall-clock ms)
    pub const SHOT_COOLDOWN_MS: f64 = 200.0;
    pub const RAPID_COOLDOWN_MS: f64 = 100.0;

    /// Rest between level-complete and the next level starting
    pub const LEVEL_COMPLETE_MS: f64 = 3_000.0;
}
