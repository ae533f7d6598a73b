//! A team's roster during a game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Team};

/// Ordered roster for one team label.
///
/// The hint-giver is stored explicitly: the first member added to a
/// competing team takes the role and keeps it. Neutral rosters never have a
/// hint-giver; every member guesses.
///
/// ```
/// use codenames_engine::core::{PlayerId, Team};
/// use codenames_engine::teams::PlayingTeam;
///
/// let mut team = PlayingTeam::new(Team::First);
/// team.add(PlayerId::new(4));
/// team.add(PlayerId::new(9));
///
/// assert_eq!(team.hint_giver(), Some(PlayerId::new(4)));
/// assert_eq!(team.guessers().collect::<Vec<_>>(), vec![PlayerId::new(9)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingTeam {
    team: Team,
    members: SmallVec<[PlayerId; 8]>,
    hint_giver: Option<PlayerId>,
}

impl PlayingTeam {
    #[must_use]
    pub fn new(team: Team) -> Self {
        Self {
            team,
            members: SmallVec::new(),
            hint_giver: None,
        }
    }

    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Append a member. Adding an existing member does nothing.
    pub fn add(&mut self, player: PlayerId) {
        if self.contains(player) {
            return;
        }
        if self.team.is_competing() && self.hint_giver.is_none() {
            self.hint_giver = Some(player);
        }
        self.members.push(player);
    }

    #[must_use]
    pub fn hint_giver(&self) -> Option<PlayerId> {
        self.hint_giver
    }

    #[must_use]
    pub fn is_hint_giver(&self, player: PlayerId) -> bool {
        self.hint_giver == Some(player)
    }

    /// Members allowed to guess, in roster order.
    pub fn guessers(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.members
            .iter()
            .copied()
            .filter(move |&p| Some(p) != self.hint_giver)
    }

    #[must_use]
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.members.contains(&player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competing_team_roles() {
        for t in Team::COMPETING {
            let mut team = PlayingTeam::new(t);
            assert_eq!(team.hint_giver(), None);

            team.add(PlayerId::new(1));
            team.add(PlayerId::new(2));
            team.add(PlayerId::new(3));

            assert!(team.is_hint_giver(PlayerId::new(1)));
            assert_eq!(team.guessers().count(), 2);
            assert_eq!(team.members(), &[PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
        }
    }

    #[test]
    fn test_neutral_team_has_no_hint_giver() {
        let mut team = PlayingTeam::new(Team::Neutral);
        team.add(PlayerId::new(1));
        team.add(PlayerId::new(2));

        assert_eq!(team.hint_giver(), None);
        assert!(!team.is_hint_giver(PlayerId::new(1)));
        assert_eq!(team.guessers().count(), 2);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut team = PlayingTeam::new(Team::Second);
        team.add(PlayerId::new(5));
        team.add(PlayerId::new(5));
        assert_eq!(team.len(), 1);
        assert!(!team.is_empty());
    }
}
