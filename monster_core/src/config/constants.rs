//! Fixed game rules

/// Starting level
pub const START_LEVEL: u32 = 1;
/// XP needed for the first level-up
pub const START_MAX_XP: u32 = 100;
pub const START_ENERGY: i32 = 100;
pub const START_ATTACK: u32 = 10;
pub const START_DEFENSE: u32 = 5;
pub const START_SPEED: u32 = 3;

/// Energy never rises above this when resting
pub const MAX_ENERGY: i32 = 100;

pub const TRAIN_ENERGY_COST: i32 = 20;
pub const TRAIN_XP_GAIN: (u32, u32) = (15, 25);

pub const REST_RECOVERY: (u32, u32) = (20, 40);

pub const BATTLE_ENERGY_COST: i32 = 30;
/// Extra energy lost on top of the flat cost when a battle is lost
pub const BATTLE_LOSS_PENALTY: i32 = 15;
pub const BATTLE_WIN_CHANCE: f64 = 0.5;
pub const BATTLE_XP_GAIN: (u32, u32) = (30, 50);

/// Threshold growth per level-up, as a fraction (x1.5, truncated)
pub const MAX_XP_GROWTH: (u32, u32) = (3, 2);
pub const LEVEL_UP_ATTACK_GAIN: (u32, u32) = (2, 5);
pub const LEVEL_UP_DEFENSE_GAIN: (u32, u32) = (1, 4);
pub const LEVEL_UP_SPEED_GAIN: (u32, u32) = (1, 3);

/// Levels per evolution stage
pub const LEVELS_PER_STAGE: u32 = 5;
pub const MAX_EVOLUTION_STAGE: u32 = 3;
