//! Start-of-game team assignment.
//!
//! Players are shuffled, then stably reordered into three priority groups:
//!
//! 1. wants to hint-give and has no team preference
//! 2. has any team preference
//! 3. no preference at all
//!
//! The per-mode passes below are greedy over that order, so earlier groups
//! get first pick of roles and teams while the shuffle keeps ties random.

use log::debug;

use super::playing_team::PlayingTeam;
use crate::core::{GameError, GameMode, GameRng, PlayerId, Result, Team, TeamMap};
use crate::players::PlayerRegistry;

/// What the assignment engine knows about one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: PlayerId,
    pub preference: Option<Team>,
    pub wants_spymaster: bool,
}

impl Candidate {
    fn priority(&self) -> u8 {
        match (self.wants_spymaster, self.preference) {
            (true, None) => 0,
            (_, Some(_)) => 1,
            (false, None) => 2,
        }
    }
}

/// Partition every registered player into rosters and write each player's
/// resolved team back onto the player.
///
/// Needs at least two players so both competing teams get a hint-giver.
pub fn assign_teams(
    registry: &mut PlayerRegistry,
    mode: GameMode,
    rng: &mut GameRng,
) -> Result<TeamMap<PlayingTeam>> {
    if registry.len() < 2 {
        return Err(GameError::InsufficientPlayers {
            required: 2,
            joined: registry.len(),
        });
    }

    let candidates: Vec<Candidate> = registry
        .shuffled_snapshot(rng)
        .into_iter()
        .filter_map(|id| registry.get(id))
        .map(|p| Candidate {
            id: p.id(),
            preference: p.team,
            wants_spymaster: p.wants_spymaster,
        })
        .collect();

    let ordered = priority_order(candidates);
    let teams = match mode {
        GameMode::ThreeTeam => assign_three_team(ordered),
        GameMode::Versus => assign_versus(ordered),
    };

    for (team, roster) in teams.iter() {
        for &id in roster.members() {
            if let Some(player) = registry.get_mut(id) {
                player.team = Some(team);
            }
        }
        debug!("{team} roster: {:?}", roster.members());
    }

    Ok(teams)
}

/// Stable reorder into the three priority groups.
#[must_use]
pub fn priority_order(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // sort_by_key is stable, so shuffle order survives within each group
    candidates.sort_by_key(Candidate::priority);
    candidates
}

/// One hint-giver each for First and Second; everyone else is Neutral.
///
/// Neutral-preferring players are moved to the back first so they are the
/// last resort for a hint-giver slot.
#[must_use]
pub fn assign_three_team(ordered: Vec<Candidate>) -> TeamMap<PlayingTeam> {
    let mut teams = TeamMap::new(PlayingTeam::new);

    let (mut rest, neutral_pref): (Vec<_>, Vec<_>) = ordered
        .into_iter()
        .partition(|c| c.preference != Some(Team::Neutral));
    rest.extend(neutral_pref);

    let first = take_preferring(&mut rest, Team::First);
    let second = take_preferring(&mut rest, Team::Second);
    let first = first.or_else(|| take_front(&mut rest));
    let second = second.or_else(|| take_front(&mut rest));

    if let Some(c) = first {
        teams[Team::First].add(c.id);
    }
    if let Some(c) = second {
        teams[Team::Second].add(c.id);
    }
    for c in rest {
        teams[Team::Neutral].add(c.id);
    }

    teams
}

/// Two teams of at most `ceil(n / 2)` players, honoring team and
/// hint-giver preferences while there is room.
#[must_use]
pub fn assign_versus(ordered: Vec<Candidate>) -> TeamMap<PlayingTeam> {
    let mut teams = TeamMap::new(PlayingTeam::new);
    let target = ordered.len().div_ceil(2);

    for c in ordered {
        let preferred = c
            .preference
            .filter(|t| t.is_competing() && teams[*t].len() < target);

        let team = match preferred {
            Some(team) => team,
            None if c.wants_spymaster && teams[Team::First].hint_giver().is_none() => Team::First,
            None if c.wants_spymaster && teams[Team::Second].hint_giver().is_none() => Team::Second,
            None if teams[Team::First].len() < target => Team::First,
            None => Team::Second,
        };
        teams[team].add(c.id);
    }

    teams
}

fn take_preferring(candidates: &mut Vec<Candidate>, team: Team) -> Option<Candidate> {
    let idx = candidates.iter().position(|c| c.preference == Some(team))?;
    Some(candidates.remove(idx))
}

fn take_front(candidates: &mut Vec<Candidate>) -> Option<Candidate> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, preference: Option<Team>, wants_spymaster: bool) -> Candidate {
        Candidate {
            id: PlayerId::new(id),
            preference,
            wants_spymaster,
        }
    }

    fn ids(team: &PlayingTeam) -> Vec<u32> {
        team.members().iter().map(|p| p.raw()).collect()
    }

    #[test]
    fn test_priority_order_groups() {
        let ordered = priority_order(vec![
            candidate(0, None, false),
            candidate(1, Some(Team::First), true),
            candidate(2, None, true),
            candidate(3, Some(Team::Neutral), false),
            candidate(4, None, false),
            candidate(5, None, true),
        ]);

        let order: Vec<u32> = ordered.iter().map(|c| c.id.raw()).collect();
        assert_eq!(order, vec![2, 5, 1, 3, 0, 4]);
    }

    #[test]
    fn test_three_team_uses_preferences() {
        let teams = assign_three_team(vec![
            candidate(0, None, false),
            candidate(1, Some(Team::Second), false),
            candidate(2, Some(Team::First), false),
            candidate(3, None, false),
        ]);

        assert_eq!(ids(&teams[Team::First]), vec![2]);
        assert_eq!(ids(&teams[Team::Second]), vec![1]);
        assert_eq!(ids(&teams[Team::Neutral]), vec![0, 3]);
    }

    #[test]
    fn test_three_team_fills_from_front() {
        let teams = assign_three_team(vec![
            candidate(0, Some(Team::Neutral), false),
            candidate(1, None, false),
            candidate(2, None, false),
        ]);

        assert_eq!(ids(&teams[Team::First]), vec![1]);
        assert_eq!(ids(&teams[Team::Second]), vec![2]);
        assert_eq!(ids(&teams[Team::Neutral]), vec![0]);
    }

    #[test]
    fn test_three_team_extra_first_preference_goes_neutral() {
        let teams = assign_three_team(vec![
            candidate(0, Some(Team::First), false),
            candidate(1, Some(Team::First), false),
            candidate(2, None, false),
        ]);

        assert_eq!(ids(&teams[Team::First]), vec![0]);
        assert_eq!(ids(&teams[Team::Second]), vec![1]);
        assert_eq!(ids(&teams[Team::Neutral]), vec![2]);
    }

    #[test]
    fn test_versus_balances() {
        let teams = assign_versus((0..5).map(|i| candidate(i, None, false)).collect());

        assert_eq!(ids(&teams[Team::First]), vec![0, 1, 2]);
        assert_eq!(ids(&teams[Team::Second]), vec![3, 4]);
        assert!(teams[Team::Neutral].is_empty());
    }

    #[test]
    fn test_versus_honors_preference_until_full() {
        let teams = assign_versus(vec![
            candidate(0, Some(Team::Second), false),
            candidate(1, Some(Team::Second), false),
            candidate(2, Some(Team::Second), false),
            candidate(3, None, false),
        ]);

        assert_eq!(ids(&teams[Team::Second]), vec![0, 1]);
        assert_eq!(ids(&teams[Team::First]), vec![2, 3]);
    }

    #[test]
    fn test_versus_spreads_hint_giver_preferences() {
        let teams = assign_versus(vec![
            candidate(0, None, true),
            candidate(1, None, true),
            candidate(2, None, false),
            candidate(3, None, false),
        ]);

        assert_eq!(teams[Team::First].hint_giver(), Some(PlayerId::new(0)));
        assert_eq!(teams[Team::Second].hint_giver(), Some(PlayerId::new(1)));
        assert_eq!(teams[Team::First].len(), 2);
        assert_eq!(teams[Team::Second].len(), 2);
    }

    #[test]
    fn test_versus_neutral_preference_is_ignored() {
        let teams = assign_versus(vec![
            candidate(0, Some(Team::Neutral), false),
            candidate(1, None, false),
            candidate(2, None, false),
            candidate(3, None, false),
        ]);

        assert!(teams[Team::Neutral].is_empty());
        assert!(teams[Team::First].contains(PlayerId::new(0)));
    }

    #[test]
    fn test_assign_teams_writes_back() {
        let mut registry = PlayerRegistry::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            registry.add(name).unwrap();
        }
        let mut rng = GameRng::new(3);

        let teams = assign_teams(&mut registry, GameMode::Versus, &mut rng).unwrap();

        assert_eq!(teams[Team::First].len(), 3);
        assert_eq!(teams[Team::Second].len(), 3);
        for player in registry.iter() {
            let team = player.team.unwrap();
            assert!(teams[team].contains(player.id()));
        }
    }

    #[test]
    fn test_assign_teams_needs_two_players() {
        let mut registry = PlayerRegistry::new();
        registry.add("solo").unwrap();
        let err = assign_teams(&mut registry, GameMode::ThreeTeam, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::InsufficientPlayers { required: 2, joined: 1 });
    }
}
