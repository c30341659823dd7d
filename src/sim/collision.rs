//! Collision resolution
//!
//! Pure passes over snapshots of the entity stores: each function takes the
//! current stores and returns the next ones plus what happened, so no pass
//! mutates a collection another pass is still reading. Order within a tick is
//! fixed: bullets vs enemies, then ship vs enemies, then ship vs power-ups.
//!
//! All checks are circular-distance comparisons between the designated entity
//! centers; a hit is strictly `distance < radius`.

use glam::Vec2;

use super::state::{Bullet, Enemy, EnemyKind, PowerUp, PowerUpKind};
use crate::consts::*;

/// Outcome of the bullet pass
#[derive(Debug)]
pub struct BulletPass {
    /// Bullets that hit nothing
    pub bullets: Vec<Bullet>,
    /// Enemies still alive
    pub enemies: Vec<Enemy>,
    /// Kinds destroyed this pass, one entry per kill
    pub kills: Vec<EnemyKind>,
}

/// Resolve bullet hits against live enemies.
///
/// Each bullet is consumed by the first enemy it overlaps, at most once.
/// Several bullets may wear down the same enemy within one tick; an enemy
/// whose health reaches zero is credited exactly once and stops absorbing
/// bullets.
pub fn resolve_bullet_hits(bullets: &[Bullet], enemies: &[Enemy]) -> BulletPass {
    let mut enemies = enemies.to_vec();
    let mut kills = Vec::new();
    let mut surviving = Vec::with_capacity(bullets.len());

    'bullets: for bullet in bullets {
        for enemy in enemies.iter_mut() {
            if enemy.health == 0 {
                continue;
            }
            if bullet.pos.distance(enemy.center()) < enemy.kind.hit_radius() {
                enemy.health -= 1;
                if enemy.health == 0 {
                    kills.push(enemy.kind);
                }
                continue 'bullets;
            }
        }
        surviving.push(bullet.clone());
    }

    enemies.retain(|e| e.health > 0);
    BulletPass {
        bullets: surviving,
        enemies,
        kills,
    }
}

/// Outcome of the ship-contact pass
#[derive(Debug)]
pub struct ContactPass {
    /// Enemies that did not ram the ship
    pub enemies: Vec<Enemy>,
    /// Total contact damage rolled against the hull (pre-clamp)
    pub damage: u32,
    /// An active shield absorbed the first contact
    pub shield_broken: bool,
}

/// Resolve enemies ramming the player ship.
///
/// A colliding enemy is always removed. The shield, if active, soaks exactly
/// one contact and breaks; further contacts in the same tick damage the hull.
pub fn resolve_ship_contacts(ship_center: Vec2, shield: bool, enemies: &[Enemy]) -> ContactPass {
    let mut shield = shield;
    let mut shield_broken = false;
    let mut damage = 0u32;
    let mut surviving = Vec::with_capacity(enemies.len());

    for enemy in enemies {
        let reach = enemy.kind.hit_radius() + PLAYER_HIT_PAD;
        if ship_center.distance(enemy.center()) < reach {
            if shield {
                shield = false;
                shield_broken = true;
            } else {
                damage += enemy.kind.contact_damage() as u32;
            }
        } else {
            surviving.push(enemy.clone());
        }
    }

    ContactPass {
        enemies: surviving,
        damage,
        shield_broken,
    }
}

/// Outcome of the pickup pass
#[derive(Debug)]
pub struct PickupPass {
    /// Power-ups still falling
    pub powerups: Vec<PowerUp>,
    /// Kinds collected this tick, in store order
    pub collected: Vec<PowerUpKind>,
}

/// Resolve the ship collecting power-ups.
pub fn resolve_pickups(ship_center: Vec2, powerups: &[PowerUp]) -> PickupPass {
    let mut collected = Vec::new();
    let mut surviving = Vec::with_capacity(powerups.len());

    for powerup in powerups {
        if ship_center.distance(powerup.center()) < PICKUP_RADIUS {
            collected.push(powerup.kind);
        } else {
            surviving.push(powerup.clone());
        }
    }

    PickupPass {
        powerups: surviving,
        collected,
    }
}
