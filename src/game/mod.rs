//! The game aggregate, its phases, and the action surface.

mod action;
mod phase;
mod state;
mod status;

pub use action::{Action, ActionOutcome};
pub use phase::{GamePhase, Hint};
pub use state::Game;
pub use status::GameStatus;
