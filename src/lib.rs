//! # codenames-engine
//!
//! Rules engine for a team word-guessing game played over a chat channel.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The engine validates actions, mutates state, and reports
//!    what happened through a [`NotificationSink`]. Rendering and transport
//!    belong to the caller.
//!
//! 2. **Checks Before Mutation**: Every action either succeeds completely or
//!    returns a [`GameError`] and leaves the game unchanged.
//!
//! 3. **Deterministic**: All shuffles and tie-breaks draw from one seeded
//!    [`GameRng`] owned by the game.
//!
//! ## Modules
//!
//! - `core`: Teams, players, budgets, RNG, configuration, errors
//! - `words`: Vocabulary, word pool, and the dealt board
//! - `players`: Player registry keyed by stable ids
//! - `teams`: Rosters, start-of-game assignment, late-joiner placement
//! - `events`: Notification sink trait and stock sinks
//! - `game`: Phase machine, the `Game` aggregate, and actions

pub mod core;
pub mod events;
pub mod game;
pub mod players;
pub mod teams;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    ErrorCategory, GameConfig, GameError, GameMode, GameRng, GameRngState, GuessBudget,
    HintCount, Player, PlayerId, Result, Team, TeamMap, WordLayout,
};

pub use crate::events::{LogSink, Notification, NotificationSink, NullSink, RecordingSink, Roster};

pub use crate::game::{Action, ActionOutcome, Game, GamePhase, GameStatus, Hint};

pub use crate::players::PlayerRegistry;

pub use crate::teams::{assign_teams, place_late_joiner, Placement, PlayingTeam};

pub use crate::words::{Board, BoardView, KeyCard, Owner, TeamWords, WordPool};
