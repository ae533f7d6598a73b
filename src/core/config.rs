//! Game configuration types.
//!
//! - `GameMode`: which assignment algorithm runs at start
//! - `WordLayout`: how many words each team owns on the table
//! - `GameConfig`: combines all configuration
//!
//! The defaults describe the standard game. Tests shrink the layout or the
//! player minimums when they need small boards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;
use super::team::Team;

/// Team layout mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two balanced competing teams, each with one hint-giver.
    #[default]
    Versus,
    /// One hint-giver per competing team; everyone else guesses as Neutral.
    ThreeTeam,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Versus => write!(f, "versus"),
            GameMode::ThreeTeam => write!(f, "three-team"),
        }
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "versus" | "vs" | "normal" => Ok(GameMode::Versus),
            "three" | "3" | "three-team" | "gray" | "grey" | "neutral" => Ok(GameMode::ThreeTeam),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

/// Number of words dealt to each owner. There is always exactly one assassin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordLayout {
    pub first: usize,
    pub second: usize,
    /// Civilian words, owned by the Neutral label.
    pub neutral: usize,
}

impl WordLayout {
    /// 9 / 8 / 7 plus the assassin: 25 words.
    pub const STANDARD: WordLayout = WordLayout {
        first: 9,
        second: 8,
        neutral: 7,
    };

    /// Words dealt to a team.
    #[must_use]
    pub const fn count(&self, team: Team) -> usize {
        match team {
            Team::First => self.first,
            Team::Second => self.second,
            Team::Neutral => self.neutral,
        }
    }

    /// Total words on the table, assassin included.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.first + self.second + self.neutral + 1
    }
}

impl Default for WordLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode the lobby starts in.
    pub mode: GameMode,
    pub layout: WordLayout,
    /// Fewest players that can start a game.
    pub min_players: usize,
    /// Fewest players for a versus game. Smaller lobbies fall back to three-team.
    pub min_versus_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Versus,
            layout: WordLayout::STANDARD,
            min_players: 3,
            min_versus_players: 4,
        }
    }
}

impl GameConfig {
    /// Check the configuration is internally consistent.
    ///
    /// Three-team assignment needs two hint-givers and at least one guesser,
    /// so fewer than three players can never be a valid start.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players < 3 {
            return Err(GameError::InvalidConfig(format!(
                "min_players must be at least 3, got {}",
                self.min_players
            )));
        }
        if self.min_versus_players < self.min_players {
            return Err(GameError::InvalidConfig(format!(
                "min_versus_players ({}) is below min_players ({})",
                self.min_versus_players, self.min_players
            )));
        }
        if self.layout.first == 0 || self.layout.second == 0 {
            return Err(GameError::InvalidConfig(
                "each competing team needs at least one word".to_string(),
            ));
        }
        Ok(())
    }

    /// Mode actually used for a game with `player_count` players.
    #[must_use]
    pub fn effective_mode(&self, mode: GameMode, player_count: usize) -> GameMode {
        if mode == GameMode::Versus && player_count < self.min_versus_players {
            GameMode::ThreeTeam
        } else {
            mode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let layout = WordLayout::default();
        assert_eq!(layout.total(), 25);
        assert_eq!(layout.count(Team::First), 9);
        assert_eq!(layout.count(Team::Second), 8);
        assert_eq!(layout.count(Team::Neutral), 7);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let config = GameConfig {
            min_players: 2,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            min_versus_players: 3,
            min_players: 4,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            layout: WordLayout {
                first: 0,
                second: 8,
                neutral: 7,
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_mode_downgrades_small_versus() {
        let config = GameConfig::default();
        assert_eq!(config.effective_mode(GameMode::Versus, 3), GameMode::ThreeTeam);
        assert_eq!(config.effective_mode(GameMode::Versus, 4), GameMode::Versus);
        assert_eq!(config.effective_mode(GameMode::ThreeTeam, 8), GameMode::ThreeTeam);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("VS".parse::<GameMode>().unwrap(), GameMode::Versus);
        assert_eq!("3".parse::<GameMode>().unwrap(), GameMode::ThreeTeam);
        assert!("solo".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
