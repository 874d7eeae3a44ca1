//! Results of monster actions, returned for display

use crate::config::constants::{LEVELS_PER_STAGE, MAX_EVOLUTION_STAGE};
use crate::monster::MonsterStats;
use serde::{Deserialize, Serialize};

/// Stat growth from a single level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// Level reached
    pub new_level: u32,
    /// Threshold for the level after that
    pub new_max_xp: u32,
    pub attack_gain: u32,
    pub defense_gain: u32,
    pub speed_gain: u32,
}

impl LevelUp {
    pub fn summary(&self) -> String {
        format!(
            "Level {}: +{} attack, +{} defense, +{} speed",
            self.new_level, self.attack_gain, self.defense_gain, self.speed_gain
        )
    }
}

/// Result of a successful `train`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainOutcome {
    pub gained_xp: u32,
    pub level_up: Option<LevelUp>,
}

/// Result of `rest`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestOutcome {
    /// Energy rolled, before the ceiling is applied
    pub recovered: u32,
}

/// Win or loss of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum BattleResult {
    Won { gained_xp: u32 },
    Lost,
}

/// Result of a successful `battle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub result: BattleResult,
    pub level_up: Option<LevelUp>,
}

impl BattleOutcome {
    pub fn won(&self) -> bool {
        matches!(self.result, BattleResult::Won { .. })
    }

    /// XP gained, present only on a win
    pub fn gained_xp(&self) -> Option<u32> {
        match self.result {
            BattleResult::Won { gained_xp } => Some(gained_xp),
            BattleResult::Lost => None,
        }
    }
}

/// Read-only view of a monster for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
    pub energy: i32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub evolution_stage: u32,
}

impl MonsterSnapshot {
    /// XP still missing before the next level-up
    pub fn xp_to_next_level(&self) -> u32 {
        self.max_xp.saturating_sub(self.xp)
    }

    /// Level at which the next evolution stage begins, if any remain
    pub fn next_evolution_level(&self) -> Option<u32> {
        if self.evolution_stage >= MAX_EVOLUTION_STAGE {
            None
        } else {
            Some((self.evolution_stage + 1) * LEVELS_PER_STAGE)
        }
    }
}

impl From<&MonsterStats> for MonsterSnapshot {
    fn from(stats: &MonsterStats) -> Self {
        MonsterSnapshot {
            level: stats.level,
            xp: stats.xp,
            max_xp: stats.max_xp,
            energy: stats.energy,
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            evolution_stage: stats.evolution_stage(),
        }
    }
}
