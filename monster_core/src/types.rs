//! Core types specific to monster_core

use crate::config::constants::{BATTLE_ENERGY_COST, TRAIN_ENERGY_COST};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something the player can ask the monster to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Train,
    Rest,
    Battle,
}

impl Action {
    /// Get all actions, in button order
    pub fn all() -> &'static [Action] {
        &[Action::Train, Action::Rest, Action::Battle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Train => "Train",
            Action::Rest => "Rest",
            Action::Battle => "Battle",
        }
    }

    /// Energy required up front to perform the action
    pub fn energy_cost(&self) -> i32 {
        match self {
            Action::Train => TRAIN_ENERGY_COST,
            Action::Rest => 0,
            Action::Battle => BATTLE_ENERGY_COST,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Action::Train => "train",
            Action::Rest => "rest",
            Action::Battle => "battle",
        };
        f.write_str(verb)
    }
}
