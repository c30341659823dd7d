//! Per-frame simulation tick
//!
//! One `tick` per display refresh. Outside `Playing` only the control inputs
//! and the level-complete timer are serviced; the entity stores never move.
//! Within a Playing tick the order is fixed: input, motion and culling, the
//! spawn roll, collision passes, progression, then the health/lives check.

use glam::Vec2;

use super::collision;
use super::levels::{LEVELS, config_for_level};
use super::spawn;
use super::state::{Bullet, GameEvent, GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Input intents gathered by the host for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement directions
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Discrete fire pulse (key press)
    pub fire_pressed: bool,
    /// Fire key held; continuous fire only under rapid-fire
    pub fire_held: bool,
    /// Toggle Playing <-> Paused
    pub pause: bool,
    /// Start a new session (from Menu or GameOver)
    pub start: bool,
    /// Back to the menu, discarding the session (from Paused or GameOver)
    pub reset: bool,
    /// Manual level skip (debug/testing)
    pub advance_level: bool,
}

/// Advance the session by one tick.
///
/// `now_ms` is wall-clock time supplied by the host; it gates the fire
/// cooldown, buff expiry, and the level-complete rest. Returns the discrete
/// events of the tick for the driver to log, sound, or persist.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Session controls are serviced regardless of phase
    if input.start && matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
        state.reset_session();
        events.push(GameEvent::LevelStarted { level: state.level });
        log::info!("new game started (seed {})", state.seed);
    }
    if input.reset && matches!(state.phase, GamePhase::Paused | GamePhase::GameOver) {
        // Session data is discarded by the next start; the high score stays
        state.phase = GamePhase::Menu;
        log::info!("returned to menu");
    }
    if input.pause {
        match state.phase {
            GamePhase::Playing => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::LevelComplete => {
            if now_ms >= state.next_level_at {
                advance_level(state, &mut events);
            }
            return events;
        }
        _ => return events,
    }

    if input.advance_level {
        advance_level(state, &mut events);
        return events;
    }

    // --- input: movement and firing ---
    apply_movement(state, input);
    let rapid = state.player.rapid_fire_active(now_ms);
    if input.fire_pressed || (rapid && input.fire_held) {
        try_fire(state, now_ms, rapid);
    }

    // --- motion, then cull whatever left the arena ---
    for bullet in &mut state.bullets {
        bullet.pos.y -= bullet.speed;
    }
    state.bullets.retain(|b| b.pos.y > BULLET_CULL_Y);

    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.speed;
    }
    state
        .enemies
        .retain(|e| e.pos.y < ARENA_HEIGHT + ENEMY_CULL_MARGIN);

    for powerup in &mut state.powerups {
        powerup.pos.y += POWERUP_FALL_SPEED;
    }
    state
        .powerups
        .retain(|p| p.pos.y < ARENA_HEIGHT + POWERUP_CULL_MARGIN);

    // --- spawn roll ---
    let cfg = config_for_level(state.level);
    spawn::roll_enemy_spawn(state, cfg);

    // --- collision passes, fixed order ---
    let pass = collision::resolve_bullet_hits(&state.bullets, &state.enemies);
    state.bullets = pass.bullets;
    state.enemies = pass.enemies;
    for kind in pass.kills {
        let points = kind.points();
        state.score += points;
        state.enemies_killed += 1;
        events.push(GameEvent::EnemyDestroyed { kind, points });
        spawn::roll_powerup_drop(state, kind);
    }

    let shield = state.player.shield_active(now_ms);
    let contact = collision::resolve_ship_contacts(state.player.center(), shield, &state.enemies);
    state.enemies = contact.enemies;
    if contact.shield_broken {
        state.player.shield_until = 0.0;
        events.push(GameEvent::ShieldBroken);
    }
    if contact.damage > 0 {
        let dealt = contact.damage.min(PLAYER_MAX_HEALTH as u32) as u8;
        state.player.health = state.player.health.saturating_sub(dealt);
        events.push(GameEvent::PlayerDamaged {
            amount: contact.damage,
        });
    }

    let pickups = collision::resolve_pickups(state.player.center(), &state.powerups);
    state.powerups = pickups.powerups;
    for kind in pickups.collected {
        apply_powerup(state, kind, now_ms);
        events.push(GameEvent::PowerUpCollected(kind));
    }

    // --- progression ---
    if check_progression(state, now_ms, &mut events) {
        return events;
    }

    // --- health / lives ---
    check_player_down(state, &mut events);

    events
}

/// Move the ship by the held directions, clamped to the arena.
fn apply_movement(state: &mut GameState, input: &TickInput) {
    let pos = &mut state.player.pos;
    if input.left {
        pos.x = (pos.x - PLAYER_SPEED).max(0.0);
    }
    if input.right {
        pos.x = (pos.x + PLAYER_SPEED).min(ARENA_WIDTH - PLAYER_SIZE);
    }
    if input.up {
        pos.y = (pos.y - PLAYER_SPEED).max(0.0);
    }
    if input.down {
        pos.y = (pos.y + PLAYER_SPEED).min(ARENA_HEIGHT - PLAYER_SIZE);
    }
}

/// Fire one bullet if the wall-clock cooldown has elapsed.
fn try_fire(state: &mut GameState, now_ms: f64, rapid: bool) {
    let cooldown = if rapid {
        RAPID_COOLDOWN_MS
    } else {
        SHOT_COOLDOWN_MS
    };
    if now_ms - state.last_shot_ms < cooldown {
        return;
    }
    state.last_shot_ms = now_ms;
    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos: state.player.pos + Vec2::new(BULLET_OFFSET_X, BULLET_OFFSET_Y),
        speed: BULLET_SPEED,
    });
}

/// Apply a collected power-up at pickup time.
///
/// Buff pickups move the expiry timestamp forward; a second pickup while one
/// is active extends the visible duration rather than stacking.
fn apply_powerup(state: &mut GameState, kind: PowerUpKind, now_ms: f64) {
    match kind {
        PowerUpKind::Health => {
            state.player.health = (state.player.health + HEALTH_RESTORE).min(PLAYER_MAX_HEALTH);
        }
        PowerUpKind::RapidFire => state.player.rapid_fire_until = now_ms + RAPID_FIRE_MS,
        PowerUpKind::Shield => state.player.shield_until = now_ms + SHIELD_MS,
    }
}

/// The level advances only when the score threshold is met AND no enemies
/// remain live; the final table entry never completes (endless last level).
fn check_progression(state: &mut GameState, now_ms: f64, events: &mut Vec<GameEvent>) -> bool {
    let cfg = config_for_level(state.level);
    if state.score < cfg.required_score || !state.enemies.is_empty() {
        return false;
    }
    if state.level as usize >= LEVELS.len() {
        return false;
    }
    state.phase = GamePhase::LevelComplete;
    state.next_level_at = now_ms + LEVEL_COMPLETE_MS;
    events.push(GameEvent::LevelComplete { level: state.level });
    log::info!("level {} complete at {} points", state.level, state.score);
    true
}

/// Move to the next level: full health, fresh bullet/power-up stores.
fn advance_level(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.level += 1;
    state.phase = GamePhase::Playing;
    state.player.health = PLAYER_MAX_HEALTH;
    state.bullets.clear();
    state.powerups.clear();
    events.push(GameEvent::LevelStarted { level: state.level });
    log::info!("level {} started", state.level);
}

/// Health hitting zero consumes exactly one life; the last life ends the run
/// and is the only transition that touches the high score.
fn check_player_down(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.player.health > 0 {
        return;
    }
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
        if state.score > state.high_score {
            state.high_score = state.score;
            events.push(GameEvent::NewHighScore(state.score));
        }
        log::info!(
            "game over: score {}, level {}, {} kills",
            state.score,
            state.level,
            state.enemies_killed
        );
    } else {
        state.player.health = PLAYER_MAX_HEALTH;
        state.player.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        events.push(GameEvent::LifeLost);
    }
}
