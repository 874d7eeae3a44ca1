//! MonsterStats - The mutable numbers behind a monster

use crate::config::constants::{
    LEVELS_PER_STAGE, MAX_EVOLUTION_STAGE, START_ATTACK, START_DEFENSE, START_ENERGY,
    START_LEVEL, START_MAX_XP, START_SPEED,
};
use serde::{Deserialize, Serialize};

/// Raw stats of a monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    /// Current level (>= 1)
    pub level: u32,
    /// Experience towards the next level
    pub xp: u32,
    /// Level-up threshold
    pub max_xp: u32,
    /// Energy pool. Capped at 100 by resting, may drop below zero after a lost battle.
    pub energy: i32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Default for MonsterStats {
    fn default() -> Self {
        MonsterStats {
            level: START_LEVEL,
            xp: 0,
            max_xp: START_MAX_XP,
            energy: START_ENERGY,
            attack: START_ATTACK,
            defense: START_DEFENSE,
            speed: START_SPEED,
        }
    }
}

impl MonsterStats {
    /// Evolution tier derived from level: `min(level / 5, 3)`
    pub fn evolution_stage(&self) -> u32 {
        (self.level / LEVELS_PER_STAGE).min(MAX_EVOLUTION_STAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = MonsterStats::default();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.xp, 0);
        assert_eq!(stats.max_xp, 100);
        assert_eq!(stats.energy, 100);
        assert_eq!(stats.attack, 10);
        assert_eq!(stats.defense, 5);
        assert_eq!(stats.speed, 3);
    }

    #[test]
    fn test_evolution_stage_thresholds() {
        let stage_at = |level| MonsterStats { level, ..Default::default() }.evolution_stage();
        assert_eq!(stage_at(1), 0);
        assert_eq!(stage_at(4), 0);
        assert_eq!(stage_at(5), 1);
        assert_eq!(stage_at(9), 1);
        assert_eq!(stage_at(10), 2);
        assert_eq!(stage_at(15), 3);
        assert_eq!(stage_at(99), 3);
    }
}
