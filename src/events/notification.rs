//! Owned notification records.

use serde::{Deserialize, Serialize};

use crate::core::{GameMode, GuessBudget, Player, Team, TeamMap};
use crate::game::Hint;
use crate::words::{BoardView, KeyCard};

/// A team roster with resolved players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Always `None` for Neutral.
    pub hint_giver: Option<Player>,
    pub guessers: Vec<Player>,
}

impl Roster {
    /// Members including the hint-giver.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guessers.len() + usize::from(self.hint_giver.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names in roster order, hint-giver first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.hint_giver
            .iter()
            .chain(&self.guessers)
            .map(Player::name)
            .collect()
    }
}

/// One call into a `NotificationSink`, as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    PlayerJoined {
        name: String,
        team: Option<Team>,
    },
    PlayerLeft {
        name: String,
    },
    PlayerRenamed {
        old_name: String,
        new_name: String,
    },
    PlayerTeamReassigned {
        name: String,
        new_team: Team,
    },
    TeamPreferenceChanged {
        name: String,
        preference: Option<Team>,
    },
    SpymasterPreferenceChanged {
        name: String,
        wants_spymaster: bool,
    },
    ModeChanged {
        actor: String,
        mode: GameMode,
    },
    GameStarted {
        players: Vec<String>,
        rosters: TeamMap<Roster>,
    },
    HintGiverBriefed {
        hint_giver: String,
        key: KeyCard,
    },
    TurnBeganHinting {
        team: Team,
        hint_giver: String,
    },
    TurnBeganGuessing {
        team: Team,
        guessers: Vec<String>,
        hint: Hint,
        remaining_guesses: GuessBudget,
    },
    AssassinRevealed {
        actor: String,
        word: String,
    },
    NeutralWordRevealed {
        actor: String,
        word: String,
    },
    TeamWordRevealed {
        actor: String,
        team: Team,
        word: String,
        remaining_count: usize,
    },
    GuessesRemaining {
        team: Team,
        remaining_guesses: GuessBudget,
    },
    GameWon {
        winner: Team,
        full_board: BoardView,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_roster_names() {
        let roster = Roster {
            hint_giver: Some(Player::new(PlayerId::new(0), "tris")),
            guessers: vec![Player::new(PlayerId::new(1), "claire")],
        };
        assert_eq!(roster.names(), vec!["tris", "claire"]);
        assert_eq!(roster.len(), 2);
        assert!(Roster::default().is_empty());
    }

    #[test]
    fn test_notification_serde() {
        let notification = Notification::TeamWordRevealed {
            actor: "claire".to_string(),
            team: Team::First,
            word: "Moon".to_string(),
            remaining_count: 4,
        };
        let json = serde_json::to_string(&notification).unwrap();
        let deserialized: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(notification, deserialized);
    }
}
