//! Core engine types: teams, players, RNG, configuration, errors, budgets.
//!
//! Everything else in the crate is built from these value types.

pub mod budget;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod team;

pub use budget::{GuessBudget, HintCount};
pub use config::{GameConfig, GameMode, WordLayout};
pub use error::{ErrorCategory, GameError, Result};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use team::{parse_team_preference, Team, TeamMap};
