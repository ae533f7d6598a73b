//! Rule violations.
//!
//! Every failed action returns a `GameError` and leaves the game untouched.
//! Messages are meant to be shown to the player who attempted the action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::team::Team;
use crate::game::GamePhase;

/// Broad class of a rule violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Action attempted in the wrong phase.
    PhaseMismatch,
    /// Wrong actor, role, or team.
    Authorization,
    /// Malformed word, count, team, or mode.
    InputValidation,
    /// Not enough players or words.
    ResourceExhaustion,
    /// Joining twice, or acting as someone who never joined.
    Membership,
}

/// Errors that can occur while driving a game.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("can't {action} during {phase}")]
    WrongPhase { action: String, phase: GamePhase },
    #[error("{0} is already in the game")]
    DuplicateName(String),
    #[error("{0} is not playing")]
    PlayerNotFound(String),
    #[error("need {required}+ players to start, have {joined}")]
    InsufficientPlayers { required: usize, joined: usize },
    #[error("need {required} words, only {available} available")]
    ResourceExhausted { required: usize, available: usize },
    #[error("{player} can't act for the {team} team")]
    NotYourTurn { player: String, team: Team },
    #[error("only the hint-giver may hint")]
    NotHintGiver,
    #[error("hint-givers may not guess or stop guessing")]
    HintGiverCannotGuess,
    #[error("a hint needs a clue")]
    EmptyClue,
    #[error("{0} is a word on the table")]
    ClueOnTable(String),
    #[error("hint count must be zero, unlimited, or at most {remaining}")]
    InvalidHintCount { remaining: usize },
    #[error("{0} is not a count")]
    MalformedHintCount(String),
    #[error("{0} is not on the table")]
    WordNotOnTable(String),
    #[error("unknown team {0}")]
    UnknownTeam(String),
    #[error("unknown game mode {0}")]
    UnknownMode(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Build a phase-mismatch error.
    pub fn wrong_phase(action: impl Into<String>, phase: GamePhase) -> Self {
        GameError::WrongPhase {
            action: action.into(),
            phase,
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::WrongPhase { .. } => ErrorCategory::PhaseMismatch,
            GameError::DuplicateName(_) | GameError::PlayerNotFound(_) => ErrorCategory::Membership,
            GameError::InsufficientPlayers { .. } | GameError::ResourceExhausted { .. } => {
                ErrorCategory::ResourceExhaustion
            }
            GameError::NotYourTurn { .. }
            | GameError::NotHintGiver
            | GameError::HintGiverCannotGuess => ErrorCategory::Authorization,
            GameError::EmptyClue
            | GameError::ClueOnTable(_)
            | GameError::InvalidHintCount { .. }
            | GameError::MalformedHintCount(_)
            | GameError::WordNotOnTable(_)
            | GameError::UnknownTeam(_)
            | GameError::UnknownMode(_)
            | GameError::InvalidConfig(_) => ErrorCategory::InputValidation,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;
