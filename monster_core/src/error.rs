//! Errors raised by monster actions

use crate::types::Action;
use thiserror::Error;

/// Failure of a monster action. Nothing is mutated when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterError {
    #[error("not enough energy to {action}: need {required}, have {available}")]
    InsufficientEnergy {
        action: Action,
        required: i32,
        available: i32,
    },
}

impl MonsterError {
    /// The action that was refused
    pub fn action(&self) -> Action {
        match self {
            MonsterError::InsufficientEnergy { action, .. } => *action,
        }
    }
}
