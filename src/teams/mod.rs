//! Team rosters and the two assignment algorithms.
//!
//! - [`assign_teams`]: full start-of-game partition, per [`GameMode`](crate::core::GameMode)
//! - [`place_late_joiner`]: live balancing for players who join mid-game
//!
//! Late placement never moves existing players or hint-givers.

mod assignment;
mod live;
mod playing_team;

pub use assignment::{assign_teams, assign_three_team, assign_versus, priority_order, Candidate};
pub use live::{place_late_joiner, Placement};
pub use playing_team::PlayingTeam;
