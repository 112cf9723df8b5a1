use crate::Card;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

/// A command the rules refuse. Never fatal: the engine reports it and leaves
/// its state untouched.
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Invalid card selection!")]
    InvalidSelection(usize),
    #[error("Cannot run from rooms consecutively!")]
    ConsecutiveRun,
    #[error("The room is empty!")]
    EmptyRoom,
    #[error("No weapon to discard!")]
    NoWeapon,
    #[error("Cannot fight this monster. Monsters must be in decreasing order.")]
    MonsterTooStrong { monster: Card, last: Card },
    #[error("The game is over. Restart to play again.")]
    GameOver,
}

impl RuleViolation {
    pub fn severity(&self) -> Severity {
        match self {
            Self::InvalidSelection(_) | Self::ConsecutiveRun | Self::MonsterTooStrong { .. } => {
                Severity::Danger
            }
            Self::NoWeapon | Self::GameOver => Severity::Warning,
            Self::EmptyRoom => Severity::Info,
        }
    }
}

/// Broken engine bookkeeping. Seeing one of these is a bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("card count drifted: expected {expected}, found {found}")]
    CardCount { expected: usize, found: usize },
    #[error("card {0} is held in more than one place")]
    Duplicate(Card),
    #[error("monster stack rises from {previous} to {next}")]
    StackOrder { previous: Card, next: Card },
    #[error("monster stack held without a weapon")]
    OrphanStack,
}
