//! Prelude module for convenient imports
//!
//! ```rust
//! use monster_core::prelude::*;
//! ```

// Core types
pub use crate::monster::{Monster, MonsterSnapshot, MonsterStats};
pub use crate::types::Action;

// Outcomes
pub use crate::monster::{BattleOutcome, BattleResult, LevelUp, RestOutcome, TrainOutcome};

// Randomness
pub use crate::rng::{RandomSource, RngSource, ScriptedRolls};

// Errors
pub use crate::error::MonsterError;
