//! The notification interface the engine calls.
//!
//! Every method has a no-op default so a collaborator only implements
//! what it renders. Arguments are structured data; the engine never builds
//! display text.

use log::info;

use super::notification::{Notification, Roster};
use crate::core::{GameMode, GuessBudget, Player, Team, TeamMap};
use crate::game::Hint;
use crate::words::{BoardView, KeyCard};

/// Receiver for game notifications.
#[allow(unused_variables)]
pub trait NotificationSink {
    /// A player joined. `team` is set for mid-game joins.
    fn player_joined(&mut self, player: &Player, team: Option<Team>) {}

    fn player_left(&mut self, player: &Player) {}

    fn player_renamed(&mut self, player: &Player, old_name: &str) {}

    /// A late joiner's preference couldn't be honored.
    fn player_team_reassigned(&mut self, player: &Player, new_team: Team) {}

    fn team_preference_changed(&mut self, player: &Player, preference: Option<Team>) {}

    fn spymaster_preference_changed(&mut self, player: &Player, wants_spymaster: bool) {}

    fn mode_changed(&mut self, actor: &Player, mode: GameMode) {}

    fn game_started(&mut self, players: &[Player], rosters: &TeamMap<Roster>) {}

    /// Private: the hint-giver's key card.
    fn hint_giver_briefed(&mut self, hint_giver: &Player, key: &KeyCard) {}

    fn turn_began_hinting(&mut self, team: Team, hint_giver: &Player) {}

    fn turn_began_guessing(
        &mut self,
        team: Team,
        guessers: &[Player],
        hint: &Hint,
        remaining_guesses: GuessBudget,
    ) {
    }

    fn assassin_revealed(&mut self, actor: &Player, word: &str) {}

    fn neutral_word_revealed(&mut self, actor: &Player, word: &str) {}

    fn team_word_revealed(&mut self, actor: &Player, team: Team, word: &str, remaining_count: usize) {}

    /// The active team still has guesses after revealing one of its own words.
    fn guesses_remaining(&mut self, team: Team, remaining_guesses: GuessBudget) {}

    fn game_won(&mut self, winner: Team, full_board: &BoardView) {}
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {}

/// Keeps every notification in order.
///
/// ```
/// use codenames_engine::events::{Notification, RecordingSink};
/// use codenames_engine::Game;
///
/// let mut game = Game::new(RecordingSink::new(), 42);
/// game.join("tris", None).unwrap();
///
/// assert!(matches!(
///     game.sink().notifications(),
///     [Notification::PlayerJoined { name, team: None }] if name == "tris"
/// ));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take everything recorded so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl NotificationSink for RecordingSink {
    fn player_joined(&mut self, player: &Player, team: Option<Team>) {
        self.push(Notification::PlayerJoined {
            name: player.name().to_string(),
            team,
        });
    }

    fn player_left(&mut self, player: &Player) {
        self.push(Notification::PlayerLeft {
            name: player.name().to_string(),
        });
    }

    fn player_renamed(&mut self, player: &Player, old_name: &str) {
        self.push(Notification::PlayerRenamed {
            old_name: old_name.to_string(),
            new_name: player.name().to_string(),
        });
    }

    fn player_team_reassigned(&mut self, player: &Player, new_team: Team) {
        self.push(Notification::PlayerTeamReassigned {
            name: player.name().to_string(),
            new_team,
        });
    }

    fn team_preference_changed(&mut self, player: &Player, preference: Option<Team>) {
        self.push(Notification::TeamPreferenceChanged {
            name: player.name().to_string(),
            preference,
        });
    }

    fn spymaster_preference_changed(&mut self, player: &Player, wants_spymaster: bool) {
        self.push(Notification::SpymasterPreferenceChanged {
            name: player.name().to_string(),
            wants_spymaster,
        });
    }

    fn mode_changed(&mut self, actor: &Player, mode: GameMode) {
        self.push(Notification::ModeChanged {
            actor: actor.name().to_string(),
            mode,
        });
    }

    fn game_started(&mut self, players: &[Player], rosters: &TeamMap<Roster>) {
        self.push(Notification::GameStarted {
            players: players.iter().map(|p| p.name().to_string()).collect(),
            rosters: rosters.clone(),
        });
    }

    fn hint_giver_briefed(&mut self, hint_giver: &Player, key: &KeyCard) {
        self.push(Notification::HintGiverBriefed {
            hint_giver: hint_giver.name().to_string(),
            key: key.clone(),
        });
    }

    fn turn_began_hinting(&mut self, team: Team, hint_giver: &Player) {
        self.push(Notification::TurnBeganHinting {
            team,
            hint_giver: hint_giver.name().to_string(),
        });
    }

    fn turn_began_guessing(
        &mut self,
        team: Team,
        guessers: &[Player],
        hint: &Hint,
        remaining_guesses: GuessBudget,
    ) {
        self.push(Notification::TurnBeganGuessing {
            team,
            guessers: guessers.iter().map(|p| p.name().to_string()).collect(),
            hint: hint.clone(),
            remaining_guesses,
        });
    }

    fn assassin_revealed(&mut self, actor: &Player, word: &str) {
        self.push(Notification::AssassinRevealed {
            actor: actor.name().to_string(),
            word: word.to_string(),
        });
    }

    fn neutral_word_revealed(&mut self, actor: &Player, word: &str) {
        self.push(Notification::NeutralWordRevealed {
            actor: actor.name().to_string(),
            word: word.to_string(),
        });
    }

    fn team_word_revealed(&mut self, actor: &Player, team: Team, word: &str, remaining_count: usize) {
        self.push(Notification::TeamWordRevealed {
            actor: actor.name().to_string(),
            team,
            word: word.to_string(),
            remaining_count,
        });
    }

    fn guesses_remaining(&mut self, team: Team, remaining_guesses: GuessBudget) {
        self.push(Notification::GuessesRemaining {
            team,
            remaining_guesses,
        });
    }

    fn game_won(&mut self, winner: Team, full_board: &BoardView) {
        self.push(Notification::GameWon {
            winner,
            full_board: full_board.clone(),
        });
    }
}

/// Writes a one-line record per notification at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn player_joined(&mut self, player: &Player, team: Option<Team>) {
        info!("player_joined player={player} team={team:?}");
    }

    fn player_left(&mut self, player: &Player) {
        info!("player_left player={player}");
    }

    fn player_renamed(&mut self, player: &Player, old_name: &str) {
        info!("player_renamed old={old_name} new={player}");
    }

    fn player_team_reassigned(&mut self, player: &Player, new_team: Team) {
        info!("player_team_reassigned player={player} team={new_team}");
    }

    fn team_preference_changed(&mut self, player: &Player, preference: Option<Team>) {
        info!("team_preference_changed player={player} preference={preference:?}");
    }

    fn spymaster_preference_changed(&mut self, player: &Player, wants_spymaster: bool) {
        info!("spymaster_preference_changed player={player} wants={wants_spymaster}");
    }

    fn mode_changed(&mut self, actor: &Player, mode: GameMode) {
        info!("mode_changed actor={actor} mode={mode}");
    }

    fn game_started(&mut self, players: &[Player], rosters: &TeamMap<Roster>) {
        info!(
            "game_started players={} first={:?} second={:?} neutral={:?}",
            players.len(),
            rosters[Team::First].names(),
            rosters[Team::Second].names(),
            rosters[Team::Neutral].names()
        );
    }

    fn turn_began_hinting(&mut self, team: Team, hint_giver: &Player) {
        info!("turn_began_hinting team={team} hint_giver={hint_giver}");
    }

    fn turn_began_guessing(
        &mut self,
        team: Team,
        guessers: &[Player],
        hint: &Hint,
        remaining_guesses: GuessBudget,
    ) {
        info!(
            "turn_began_guessing team={team} guessers={} clue={} count={} guesses={remaining_guesses}",
            guessers.len(),
            hint.clue,
            hint.count
        );
    }

    fn assassin_revealed(&mut self, actor: &Player, word: &str) {
        info!("assassin_revealed actor={actor} word={word}");
    }

    fn neutral_word_revealed(&mut self, actor: &Player, word: &str) {
        info!("neutral_word_revealed actor={actor} word={word}");
    }

    fn team_word_revealed(&mut self, actor: &Player, team: Team, word: &str, remaining_count: usize) {
        info!("team_word_revealed actor={actor} team={team} word={word} left={remaining_count}");
    }

    fn guesses_remaining(&mut self, team: Team, remaining_guesses: GuessBudget) {
        info!("guesses_remaining team={team} guesses={remaining_guesses}");
    }

    fn game_won(&mut self, winner: Team, _full_board: &BoardView) {
        info!("game_won winner={winner}");
    }
}
