//! Game state and core simulation types
//!
//! The rendering layer only ever sees the per-tick [`Snapshot`]; everything
//! else here belongs to the simulation side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-level
    Paused,
    /// Between-level rest (3 seconds, then auto-advance)
    LevelComplete,
    /// Run ended, terminal until start or reset
    GameOver,
}

/// Enemy archetypes
///
/// All per-enemy stats derive from the kind; there is no other enemy tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
    Boss,
}

impl EnemyKind {
    /// Hits required to destroy
    pub fn base_health(&self) -> u8 {
        match self {
            EnemyKind::Basic | EnemyKind::Fast => 1,
            EnemyKind::Tank => 3,
            EnemyKind::Boss => 15,
        }
    }

    /// Multiplier applied to the level's base speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            EnemyKind::Basic => 1.0,
            EnemyKind::Fast => 1.8,
            EnemyKind::Tank => 0.7,
            EnemyKind::Boss => 0.5,
        }
    }

    /// Visual footprint (square, arena units)
    pub fn sprite_size(&self) -> f32 {
        match self {
            EnemyKind::Basic | EnemyKind::Fast => 50.0,
            EnemyKind::Tank => 60.0,
            EnemyKind::Boss => 80.0,
        }
    }

    /// Collision radius, also the offset from the top-left corner to the
    /// collision center
    pub fn hit_radius(&self) -> f32 {
        match self {
            EnemyKind::Basic | EnemyKind::Fast => 25.0,
            EnemyKind::Tank => 30.0,
            EnemyKind::Boss => 40.0,
        }
    }

    /// Score awarded on destruction
    pub fn points(&self) -> u32 {
        match self {
            EnemyKind::Basic => 10,
            EnemyKind::Fast => 20,
            EnemyKind::Tank => 30,
            EnemyKind::Boss => 100,
        }
    }

    /// Damage dealt by ramming the player
    pub fn contact_damage(&self) -> u8 {
        match self {
            EnemyKind::Basic | EnemyKind::Fast => 20,
            EnemyKind::Tank => 25,
            EnemyKind::Boss => 40,
        }
    }

    /// Chance of a power-up drop on destruction (before the flat spawn gate)
    pub fn drop_chance(&self) -> f32 {
        match self {
            EnemyKind::Basic | EnemyKind::Fast => 0.2,
            EnemyKind::Tank => 0.4,
            EnemyKind::Boss => 0.8,
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    RapidFire,
    Shield,
}

/// A player bullet, travelling straight up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    /// Units per frame (upward)
    pub speed: f32,
}

/// An enemy ship, descending at a fixed per-entity speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Units per frame (downward), level base speed x kind multiplier
    pub speed: f32,
    pub health: u8,
    pub max_health: u8,
}

impl Enemy {
    /// Collision center used by all distance checks
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.kind.hit_radius())
    }
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

impl PowerUp {
    /// Collision center used by the pickup check
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(POWERUP_CENTER)
    }
}

/// The player ship
///
/// Buffs are expiry timestamps rather than scheduled callbacks: a second pickup
/// of the same buff simply moves the expiry forward, and nothing can clear the
/// flag early except a shield-breaking hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub health: u8,
    /// Shield buff expiry (ms timestamp, 0 = inactive)
    pub shield_until: f64,
    /// Rapid-fire buff expiry (ms timestamp, 0 = inactive)
    pub rapid_fire_until: f64,
}

impl Player {
    /// Fresh ship at the spawn point, full health, no buffs
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            health: PLAYER_MAX_HEALTH,
            shield_until: 0.0,
            rapid_fire_until: 0.0,
        }
    }

    /// Collision center used by all distance checks
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_CENTER)
    }

    pub fn shield_active(&self, now_ms: f64) -> bool {
        now_ms < self.shield_until
    }

    pub fn rapid_fire_active(&self, now_ms: f64) -> bool {
        now_ms < self.rapid_fire_until
    }
}

/// Discrete things that happened during a tick
///
/// Consumed by the frame driver and the host (logging, sound, persistence);
/// the sim itself never reads them back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    PowerUpCollected(PowerUpKind),
    PlayerDamaged { amount: u32 },
    ShieldBroken,
    LifeLost,
    LevelComplete { level: u32 },
    LevelStarted { level: u32 },
    GameOver { score: u32 },
    NewHighScore(u32),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving every random draw in the sim
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Current level, 1-based
    pub level: u32,
    pub lives: u8,
    pub enemies_killed: u32,
    /// Best score across sessions; written back through the score store on
    /// the game-over transition
    pub high_score: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    /// When the level-complete rest ends (valid while in LevelComplete)
    pub(crate) next_level_at: f64,
    /// Timestamp of the last shot, for the fire cooldown
    pub(crate) last_shot_ms: f64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session in the menu with the given seed and the high
    /// score read from the store
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            lives: START_LIVES,
            enemies_killed: 0,
            high_score,
            player: Player::spawn(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            next_level_at: 0.0,
            last_shot_ms: f64::NEG_INFINITY,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID, unique across all live entities
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything session-scoped to defaults and enter Playing.
    /// The high score and the RNG stream survive the reset.
    pub(crate) fn reset_session(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.level = 1;
        self.lives = START_LIVES;
        self.enemies_killed = 0;
        self.player = Player::spawn();
        self.bullets.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.next_level_at = 0.0;
        self.last_shot_ms = f64::NEG_INFINITY;
    }

    /// Read-only view for the rendering collaborator
    ///
    /// Buff expiry timestamps are resolved against `now_ms` so the renderer
    /// only ever sees plain booleans.
    pub fn snapshot(&self, now_ms: f64) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            level: self.level,
            lives: self.lives,
            high_score: self.high_score,
            enemies_killed: self.enemies_killed,
            player: PlayerView {
                pos: self.player.pos,
                health: self.player.health,
                shield: self.player.shield_active(now_ms),
                rapid_fire: self.player.rapid_fire_active(now_ms),
            },
            bullets: self.bullets.clone(),
            enemies: self.enemies.clone(),
            powerups: self.powerups.clone(),
        }
    }
}

/// Player portion of the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub health: u8,
    pub shield: bool,
    pub rapid_fire: bool,
}

/// Everything the rendering layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub lives: u8,
    pub high_score: u32,
    pub enemies_killed: u32,
    pub player: PlayerView,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_are_unique_and_increasing() {
        let mut state = GameState::new(1, 0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        let c = state.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn snapshot_resolves_buffs_against_now() {
        let mut state = GameState::new(1, 0);
        state.player.shield_until = 5_000.0;
        state.player.rapid_fire_until = 2_000.0;

        let snap = state.snapshot(1_000.0);
        assert!(snap.player.shield);
        assert!(snap.player.rapid_fire);

        let snap = state.snapshot(3_000.0);
        assert!(snap.player.shield);
        assert!(!snap.player.rapid_fire);

        let snap = state.snapshot(6_000.0);
        assert!(!snap.player.shield);
    }

    #[test]
    fn reset_session_keeps_high_score_and_seed() {
        let mut state = GameState::new(7, 4200);
        state.score = 999;
        state.level = 3;
        state.lives = 1;
        state.enemies_killed = 12;
        state.reset_session();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.enemies_killed, 0);
        assert_eq!(state.high_score, 4200);
        assert_eq!(state.seed, 7);
        assert!(state.bullets.is_empty() && state.enemies.is_empty() && state.powerups.is_empty());
        assert_eq!(state.player, Player::spawn());
    }
}
