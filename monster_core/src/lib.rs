//! monster_core - Stat rules for a trainable virtual monster
//!
//! This library provides:
//! - Monster: Owns the stats and applies Train, Rest and Battle
//! - RandomSource: Pluggable dice so outcomes can be scripted
//! - MonsterSnapshot: Read-only view for rendering
//! - Config helpers: Rule constants and TOML loading

pub mod config;
pub mod error;
pub mod monster;
pub mod prelude;
pub mod rng;
pub mod types;

// Re-export core types for convenience
pub use error::MonsterError;
pub use monster::{
    BattleOutcome, BattleResult, LevelUp, Monster, MonsterSnapshot, MonsterStats, RestOutcome,
    TrainOutcome,
};
pub use rng::{RandomSource, RngSource, ScriptedRolls};
pub use types::Action;
