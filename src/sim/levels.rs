//! Static level table
//!
//! Seven hand-tuned levels; lookups past the end clamp to the last entry, so
//! any level number is defined behavior rather than an error.

use super::state::EnemyKind;

/// Immutable per-level tuning
#[derive(Debug, Clone)]
pub struct LevelConfig {
    /// Chance of spawning one enemy on any Playing tick
    pub spawn_rate: f32,
    /// Base enemy speed (units/frame) before the kind multiplier
    pub enemy_speed: f32,
    /// Boss encounter level
    pub boss_level: bool,
    /// Kinds the spawner may pick from (never empty)
    pub enemy_kinds: &'static [EnemyKind],
    /// Cumulative score needed, with no live enemies, to advance
    pub required_score: u32,
}

use EnemyKind::{Basic, Boss, Fast, Tank};

pub const LEVELS: &[LevelConfig] = &[
    LevelConfig {
        spawn_rate: 0.02,
        enemy_speed: 1.0,
        boss_level: false,
        enemy_kinds: &[Basic],
        required_score: 500,
    },
    LevelConfig {
        spawn_rate: 0.025,
        enemy_speed: 1.2,
        boss_level: false,
        enemy_kinds: &[Basic, Fast],
        required_score: 1200,
    },
    LevelConfig {
        spawn_rate: 0.03,
        enemy_speed: 1.4,
        boss_level: false,
        enemy_kinds: &[Basic, Fast, Tank],
        required_score: 2000,
    },
    LevelConfig {
        spawn_rate: 0.02,
        enemy_speed: 1.8,
        boss_level: true,
        enemy_kinds: &[Basic, Fast, Tank, Boss],
        required_score: 3000,
    },
    LevelConfig {
        spawn_rate: 0.035,
        enemy_speed: 2.0,
        boss_level: false,
        enemy_kinds: &[Fast, Tank],
        required_score: 4500,
    },
    LevelConfig {
        spawn_rate: 0.04,
        enemy_speed: 2.2,
        boss_level: false,
        enemy_kinds: &[Basic, Fast, Tank],
        required_score: 6000,
    },
    LevelConfig {
        spawn_rate: 0.025,
        enemy_speed: 2.5,
        boss_level: true,
        enemy_kinds: &[Fast, Tank, Boss],
        required_score: 8000,
    },
];

/// Config for a 1-indexed level, clamped to the last defined entry
pub fn config_for_level(level: u32) -> &'static LevelConfig {
    let idx = (level.max(1) as usize - 1).min(LEVELS.len() - 1);
    &LEVELS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_one_indexed() {
        assert_eq!(config_for_level(1).required_score, 500);
        assert_eq!(config_for_level(2).required_score, 1200);
    }

    #[test]
    fn lookup_clamps_past_table_end() {
        let last = config_for_level(LEVELS.len() as u32);
        assert_eq!(config_for_level(99).required_score, last.required_score);
        assert_eq!(config_for_level(u32::MAX).required_score, last.required_score);
    }

    #[test]
    fn level_zero_falls_back_to_first_entry() {
        assert_eq!(config_for_level(0).required_score, 500);
    }

    #[test]
    fn every_level_has_spawnable_kinds() {
        for cfg in LEVELS {
            assert!(!cfg.enemy_kinds.is_empty());
            assert!(cfg.spawn_rate > 0.0 && cfg.spawn_rate < 1.0);
        }
    }

    #[test]
    fn thresholds_strictly_increase() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0].required_score < pair[1].required_score);
        }
    }

    #[test]
    fn boss_levels_allow_boss_spawns() {
        for cfg in LEVELS {
            assert_eq!(cfg.boss_level, cfg.enemy_kinds.contains(&EnemyKind::Boss));
        }
    }
}
