//! Phase machine states and the current hint.
//!
//! ```text
//! PreGame ──start──▶ Hinting ──hint──▶ Guessing ──end of turn──▶ Hinting
//!                                          │
//!                                          └──win / assassin──▶ PostGame
//! ```

use serde::{Deserialize, Serialize};

use crate::core::HintCount;

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Lobby: players join, leave, and set preferences.
    #[default]
    PreGame,
    /// The active team's hint-giver must give a clue.
    Hinting,
    /// The active team (and Neutral) guess.
    Guessing,
    /// Terminal. A new `Game` starts the next round.
    PostGame,
}

impl GamePhase {
    /// Is a game underway (hinting or guessing)?
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, GamePhase::Hinting | GamePhase::Guessing)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::PreGame => "pre-game",
            GamePhase::Hinting => "hinting",
            GamePhase::Guessing => "guessing",
            GamePhase::PostGame => "post-game",
        };
        write!(f, "{name}")
    }
}

/// A clue and the number of words it covers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub clue: String,
    pub count: HintCount,
}
