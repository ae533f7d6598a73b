//! Team labels and per-team data storage.
//!
//! ## Team
//!
//! Three labels: the two competing teams and a neutral team whose members
//! only guess. Neutral is never the active team.
//!
//! ## TeamMap
//!
//! Fixed-size per-team storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Team`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::GameError;

/// Team label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// First competing team. Always hints first.
    First,
    /// Second competing team.
    Second,
    /// Guess-only team used in three-team games. Also owns the civilian words.
    Neutral,
}

impl Team {
    /// All labels in index order.
    pub const ALL: [Team; 3] = [Team::First, Team::Second, Team::Neutral];

    /// The two teams that can be active and can win.
    pub const COMPETING: [Team; 2] = [Team::First, Team::Second];

    /// Get the array index for this label.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::First => 0,
            Team::Second => 1,
            Team::Neutral => 2,
        }
    }

    /// The opposing team.
    ///
    /// Neutral has no opponent and maps to itself.
    ///
    /// ```
    /// use codenames_engine::core::Team;
    ///
    /// assert_eq!(Team::First.opposite(), Team::Second);
    /// assert_eq!(Team::Second.opposite(), Team::First);
    /// assert_eq!(Team::Neutral.opposite(), Team::Neutral);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Team {
        match self {
            Team::First => Team::Second,
            Team::Second => Team::First,
            Team::Neutral => Team::Neutral,
        }
    }

    /// Is this one of the two competing teams?
    #[must_use]
    pub const fn is_competing(self) -> bool {
        !matches!(self, Team::Neutral)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Team::First => "First",
            Team::Second => "Second",
            Team::Neutral => "Neutral",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Team {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "f" | "green" | "g" => Ok(Team::First),
            "second" | "s" | "pink" | "p" => Ok(Team::Second),
            "neutral" | "gray" | "grey" => Ok(Team::Neutral),
            _ => Err(GameError::UnknownTeam(s.to_string())),
        }
    }
}

/// Parse a team preference where `none` clears the preference.
///
/// ```
/// use codenames_engine::core::{parse_team_preference, Team};
///
/// assert_eq!(parse_team_preference("pink").unwrap(), Some(Team::Second));
/// assert_eq!(parse_team_preference("none").unwrap(), None);
/// assert!(parse_team_preference("purple").is_err());
/// ```
pub fn parse_team_preference(s: &str) -> Result<Option<Team>, GameError> {
    if s.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use codenames_engine::core::{Team, TeamMap};
///
/// let mut sizes: TeamMap<usize> = TeamMap::with_value(0);
/// sizes[Team::Second] += 2;
///
/// assert_eq!(sizes[Team::First], 0);
/// assert_eq!(sizes[Team::Second], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 3],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            data: Team::ALL.map(factory),
        }
    }

    /// Create a TeamMap from values in label order (First, Second, Neutral).
    pub fn from_array(data: [T; 3]) -> Self {
        Self { data }
    }

    /// Create a new TeamMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new TeamMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        &self.data[team.index()]
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (Team, &T) pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for TeamMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
