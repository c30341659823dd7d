//! Probabilistic entity spawning
//!
//! Enemy spawns roll once per Playing tick against the current level's rate.
//! Power-ups only spawn as a side effect of a kill, behind two independent
//! gates: the destroyed kind's drop chance and a flat 15% roll.

use glam::Vec2;
use rand::Rng;

use super::levels::LevelConfig;
use super::state::{Enemy, EnemyKind, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Roll the per-tick enemy spawn; pushes at most one enemy.
pub fn roll_enemy_spawn(state: &mut GameState, cfg: &LevelConfig) {
    if state.rng.random::<f32>() >= cfg.spawn_rate {
        return;
    }
    let kind = cfg.enemy_kinds[state.rng.random_range(0..cfg.enemy_kinds.len())];
    let x = state.rng.random_range(0.0..ARENA_WIDTH - kind.sprite_size());
    let health = kind.base_health();
    let id = state.next_entity_id();
    state.enemies.push(Enemy {
        id,
        kind,
        pos: Vec2::new(x, ENEMY_SPAWN_Y),
        speed: cfg.enemy_speed * kind.speed_multiplier(),
        health,
        max_health: health,
    });
    log::debug!("spawned {kind:?} #{id} at x={x:.0}");
}

/// Roll the power-up drop for a destroyed enemy.
///
/// Net drop probability is `kind.drop_chance() * POWERUP_SPAWN_CHANCE`; the
/// power-up kind and x position are uniform.
pub fn roll_powerup_drop(state: &mut GameState, kind: EnemyKind) {
    if state.rng.random::<f32>() >= kind.drop_chance() {
        return;
    }
    if state.rng.random::<f32>() >= POWERUP_SPAWN_CHANCE {
        return;
    }
    const KINDS: [PowerUpKind; 3] = [
        PowerUpKind::Health,
        PowerUpKind::RapidFire,
        PowerUpKind::Shield,
    ];
    let pick = KINDS[state.rng.random_range(0..KINDS.len())];
    let x = state.rng.random_range(0.0..ARENA_WIDTH - POWERUP_SIZE);
    let id = state.next_entity_id();
    state.powerups.push(PowerUp {
        id,
        kind: pick,
        pos: Vec2::new(x, POWERUP_SPAWN_Y),
    });
    log::debug!("{kind:?} dropped a {pick:?} power-up at x={x:.0}");
}
