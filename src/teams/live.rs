//! Placement for players who join after the game has started.
//!
//! This is a lighter rule than start-of-game assignment: hint-givers are
//! already fixed, so only roster sizes and the stated preference matter.

use super::playing_team::PlayingTeam;
use crate::core::{GameMode, GameRng, Team, TeamMap};

/// Where a late joiner ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub team: Team,
    /// The stated preference could not be honored.
    pub moved: bool,
}

/// Pick a team for a late joiner.
///
/// - Three-team games put everyone on Neutral.
/// - Versus games ignore a Neutral preference, override a preference for
///   the larger team, and otherwise fill the smaller team (coin flip on a tie).
pub fn place_late_joiner(
    mode: GameMode,
    preference: Option<Team>,
    teams: &TeamMap<PlayingTeam>,
    rng: &mut GameRng,
) -> Placement {
    if mode == GameMode::ThreeTeam {
        return Placement {
            team: Team::Neutral,
            moved: preference.is_some_and(Team::is_competing),
        };
    }

    let first = teams[Team::First].len();
    let second = teams[Team::Second].len();

    match preference {
        Some(Team::Second) if first < second => Placement {
            team: Team::First,
            moved: true,
        },
        Some(Team::First) if second < first => Placement {
            team: Team::Second,
            moved: true,
        },
        Some(team @ (Team::First | Team::Second)) => Placement { team, moved: false },
        Some(Team::Neutral) | None => {
            let team = if first < second {
                Team::First
            } else if second < first {
                Team::Second
            } else if rng.coin_flip() {
                Team::First
            } else {
                Team::Second
            };
            Placement { team, moved: false }
        }
    }
}
