//! Read-only game snapshot.

use serde::{Deserialize, Serialize};

use super::phase::{GamePhase, Hint};
use crate::core::{GameMode, GuessBudget, Team, TeamMap};
use crate::events::Roster;

/// Everything a "stats" or "words" command shows. Holds no hidden ownership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub phase: GamePhase,
    pub mode: GameMode,
    pub active_team: Option<Team>,
    pub current_hint: Option<Hint>,
    pub remaining_guesses: GuessBudget,
    /// Unrevealed words in display order.
    pub table: Vec<String>,
    pub revealed: TeamMap<Vec<String>>,
    pub rosters: TeamMap<Roster>,
    /// Display names in join order.
    pub players: Vec<String>,
    pub winner: Option<Team>,
}
