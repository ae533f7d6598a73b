//! The game aggregate and its phase machine.
//!
//! `Game` owns the players, rosters, board, word pool, RNG, and a
//! notification sink. Every state-changing method runs all of its checks
//! before the first mutation, so a returned error means nothing changed.

use log::{debug, info};

use super::phase::{GamePhase, Hint};
use super::status::GameStatus;
use crate::core::{
    GameConfig, GameError, GameMode, GameRng, GameRngState, GuessBudget, HintCount, Player,
    PlayerId, Result, Team, TeamMap,
};
use crate::events::{NotificationSink, NullSink, Roster};
use crate::players::PlayerRegistry;
use crate::teams::{assign_teams, place_late_joiner, PlayingTeam};
use crate::words::{Board, Owner, WordPool};

/// One session of the game, from lobby to result.
///
/// ## Example
///
/// ```
/// use codenames_engine::core::{GameMode, HintCount, Team};
/// use codenames_engine::events::RecordingSink;
/// use codenames_engine::{Game, GamePhase};
///
/// let mut game = Game::new(RecordingSink::new(), 7);
/// for name in ["ana", "ben", "cam"] {
///     game.join(name, None).unwrap();
/// }
/// game.start_game().unwrap();
///
/// // Three players can't fill two versus teams
/// assert_eq!(game.mode(), GameMode::ThreeTeam);
/// assert_eq!(game.phase(), GamePhase::Hinting);
///
/// let giver = game.roster(Team::First).hint_giver().unwrap();
/// game.hint(giver, "Zebra", HintCount::Finite(1)).unwrap();
/// assert_eq!(game.phase(), GamePhase::Guessing);
/// ```
pub struct Game<S: NotificationSink = NullSink> {
    config: GameConfig,
    phase: GamePhase,
    active_team: Option<Team>,
    mode: GameMode,
    players: PlayerRegistry,
    teams: TeamMap<PlayingTeam>,
    board: Board,
    pool: WordPool,
    current_hint: Option<Hint>,
    remaining_guesses: GuessBudget,
    winner: Option<Team>,
    rng: GameRng,
    sink: S,
}

impl<S: NotificationSink> Game<S> {
    /// Create a game with the default config and built-in vocabulary.
    pub fn new(sink: S, seed: u64) -> Self {
        let config = GameConfig::default();
        Self::build(sink, GameRng::new(seed), config, WordPool::standard())
    }

    /// Create a game with a custom config and word pool.
    pub fn with_config(sink: S, seed: u64, config: GameConfig, pool: WordPool) -> Result<Self> {
        config.validate()?;
        pool.ensure_capacity(config.layout.total())?;
        Ok(Self::build(sink, GameRng::new(seed), config, pool))
    }

    /// Create a game whose RNG resumes from a saved state.
    pub fn with_rng_state(
        sink: S,
        state: &GameRngState,
        config: GameConfig,
        pool: WordPool,
    ) -> Result<Self> {
        config.validate()?;
        pool.ensure_capacity(config.layout.total())?;
        Ok(Self::build(sink, GameRng::from_state(state), config, pool))
    }

    fn build(sink: S, rng: GameRng, config: GameConfig, pool: WordPool) -> Self {
        Self {
            mode: config.mode,
            config,
            phase: GamePhase::PreGame,
            active_team: None,
            players: PlayerRegistry::new(),
            teams: TeamMap::new(PlayingTeam::new),
            board: Board::default(),
            pool,
            current_hint: None,
            remaining_guesses: GuessBudget::default(),
            winner: None,
            rng,
            sink,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The team whose turn it is. `None` outside a game.
    #[must_use]
    pub fn active_team(&self) -> Option<Team> {
        self.active_team
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    #[must_use]
    pub fn current_hint(&self) -> Option<&Hint> {
        self.current_hint.as_ref()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> GuessBudget {
        self.remaining_guesses
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roster(&self, team: Team) -> &PlayingTeam {
        &self.teams[team]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Resolve a display name to a player id.
    pub fn player_id(&self, name: &str) -> Result<PlayerId> {
        self.players.id_of(name)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Current RNG state, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Snapshot for status displays.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            phase: self.phase,
            mode: self.mode,
            active_team: self.active_team,
            current_hint: self.current_hint.clone(),
            remaining_guesses: self.remaining_guesses,
            table: self.board.table().to_vec(),
            revealed: TeamMap::new(|team| self.board.team_words(team).revealed().to_vec()),
            rosters: self.rosters(),
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
            winner: self.winner,
        }
    }

    // === Lobby ===

    /// Add a player. Mid-game joiners are placed on a team immediately.
    pub fn join(&mut self, name: &str, preferred_team: Option<Team>) -> Result<PlayerId> {
        if self.phase == GamePhase::PostGame {
            return Err(GameError::wrong_phase("join", self.phase));
        }
        if self.players.contains(name) {
            return Err(GameError::DuplicateName(name.to_string()));
        }

        let id = self.players.add(name)?;

        if !self.phase.is_in_progress() {
            self.player_mut(id)?.team = preferred_team;
            let player = self.players.player(id)?;
            self.sink.player_joined(player, None);
            return Ok(id);
        }

        let placement = place_late_joiner(self.mode, preferred_team, &self.teams, &mut self.rng);
        self.teams[placement.team].add(id);
        self.player_mut(id)?.team = Some(placement.team);
        debug!("late joiner {name} placed on {}", placement.team);

        let player = self.players.player(id)?;
        if placement.moved {
            self.sink.player_team_reassigned(player, placement.team);
        }
        self.sink.player_joined(player, Some(placement.team));
        Ok(id)
    }

    /// Remove a player. Only allowed before the game starts.
    pub fn leave(&mut self, name: &str) -> Result<()> {
        if self.phase != GamePhase::PreGame {
            return Err(GameError::wrong_phase("leave", self.phase));
        }

        let player = self.players.remove(name)?;
        self.sink.player_left(&player);
        Ok(())
    }

    /// Follow a display-name change. Allowed in every phase.
    pub fn rename_player(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let id = self.players.id_of(old_name)?;
        let old_name = self.players.rename(id, new_name)?;

        let player = self.players.player(id)?;
        self.sink.player_renamed(player, &old_name);
        Ok(())
    }

    /// Set or clear a player's team preference.
    pub fn set_team_preference(&mut self, actor: PlayerId, preference: Option<Team>) -> Result<()> {
        self.require_phase(GamePhase::PreGame, "set a team preference")?;

        self.player_mut(actor)?.team = preference;
        let player = self.players.player(actor)?;
        self.sink.team_preference_changed(player, preference);
        Ok(())
    }

    /// Flip a player's hint-giver preference, returning the new value.
    pub fn toggle_spymaster_preference(&mut self, actor: PlayerId) -> Result<bool> {
        self.require_phase(GamePhase::PreGame, "set a hint-giver preference")?;

        let wants = self.player_mut(actor)?.toggle_spymaster_preference();
        let player = self.players.player(actor)?;
        self.sink.spymaster_preference_changed(player, wants);
        Ok(wants)
    }

    /// Choose the mode for the next start.
    pub fn set_mode(&mut self, actor: PlayerId, mode: GameMode) -> Result<()> {
        self.require_phase(GamePhase::PreGame, "set the game mode")?;
        let player = self.players.player(actor)?;

        self.mode = mode;
        self.sink.mode_changed(player, mode);
        Ok(())
    }

    // === Game flow ===

    /// Assign teams, deal the table, and hand the first turn to First.
    pub fn start_game(&mut self) -> Result<()> {
        self.require_phase(GamePhase::PreGame, "start")?;

        let joined = self.players.len();
        if joined < self.config.min_players {
            return Err(GameError::InsufficientPlayers {
                required: self.config.min_players,
                joined,
            });
        }
        self.pool.ensure_capacity(self.config.layout.total())?;

        let mode = self.config.effective_mode(self.mode, joined);
        if mode != self.mode {
            debug!("{joined} players is too few for {}, using {mode}", self.mode);
        }

        let teams = assign_teams(&mut self.players, mode, &mut self.rng)?;
        let board = Board::deal(&mut self.pool, self.config.layout, &mut self.rng)?;

        self.mode = mode;
        self.teams = teams;
        self.board = board;
        self.phase = GamePhase::Hinting;
        self.active_team = Some(Team::First);
        self.current_hint = None;
        self.remaining_guesses = GuessBudget::default();
        self.winner = None;
        info!("game started: {joined} players, {mode} mode");

        let players: Vec<Player> = self.players.iter().cloned().collect();
        let rosters = self.rosters();
        self.sink.game_started(&players, &rosters);

        // First's hint-giver is briefed with the first hinting turn
        if let Some(giver) = self.hint_giver(Team::Second) {
            let key = self.board.key_card();
            self.sink.hint_giver_briefed(&giver, &key);
        }
        self.notify_phase();
        Ok(())
    }

    /// Give a clue for the active team.
    ///
    /// A count of zero grants unlimited guessing, the same as `Unlimited`.
    pub fn hint(&mut self, actor: PlayerId, clue: &str, count: HintCount) -> Result<()> {
        let active = self.require_turn(GamePhase::Hinting, "hint")?;
        let player = self.players.player(actor)?;

        if player.team != Some(active) {
            return Err(GameError::NotYourTurn {
                player: player.name().to_string(),
                team: active,
            });
        }
        if !self.teams[active].is_hint_giver(actor) {
            return Err(GameError::NotHintGiver);
        }
        let clue = clue.trim();
        if clue.is_empty() {
            return Err(GameError::EmptyClue);
        }
        if self.board.find_on_table(clue).is_some() {
            return Err(GameError::ClueOnTable(clue.to_string()));
        }
        let remaining = self.board.team_words(active).remaining().len();
        if let HintCount::Finite(n) = count {
            if n as usize > remaining {
                return Err(GameError::InvalidHintCount { remaining });
            }
        }

        self.remaining_guesses = count.budget();
        self.current_hint = Some(Hint {
            clue: clue.to_string(),
            count,
        });
        self.phase = GamePhase::Guessing;
        debug!("{active} hint {clue} ({count}), {} guesses", self.remaining_guesses);

        self.notify_phase();
        Ok(())
    }

    /// Reveal a table word and resolve it by owner.
    pub fn guess(&mut self, actor: PlayerId, word: &str) -> Result<Owner> {
        let active = self.require_turn(GamePhase::Guessing, "guess")?;
        let actor = self.require_guesser(actor, active)?.clone();

        let word = self
            .board
            .find_on_table(word)
            .ok_or_else(|| GameError::WordNotOnTable(word.trim().to_string()))?
            .to_string();
        let owner = self.board.reveal(&word)?;
        debug!("{word} revealed: {owner:?}");

        match owner {
            Owner::Assassin => {
                self.sink.assassin_revealed(&actor, &word);
                self.declare_winner(active.opposite());
            }
            Owner::Team(Team::Neutral) => {
                self.sink.neutral_word_revealed(&actor, &word);
                self.end_guessing();
            }
            Owner::Team(team) if team != active => {
                let left = self.board.team_words(team).remaining().len();
                self.sink.team_word_revealed(&actor, team, &word, left);
                self.end_guessing();
            }
            Owner::Team(team) => {
                self.remaining_guesses = self.remaining_guesses.spend();
                let left = self.board.team_words(team).remaining().len();
                self.sink.team_word_revealed(&actor, team, &word, left);
                if !self.remaining_guesses.is_exhausted() {
                    self.sink.guesses_remaining(team, self.remaining_guesses);
                }

                if !self.check_win() && self.remaining_guesses.is_exhausted() {
                    self.end_guessing();
                }
            }
        }
        Ok(owner)
    }

    /// End the active team's guessing early.
    pub fn stop(&mut self, actor: PlayerId) -> Result<()> {
        let active = self.require_turn(GamePhase::Guessing, "stop guessing")?;
        self.require_guesser(actor, active)?;

        self.end_guessing();
        Ok(())
    }

    // === Internals ===

    /// Hand the turn to the other team unless someone has already won.
    fn end_guessing(&mut self) {
        if self.check_win() {
            return;
        }
        let Some(active) = self.active_team else {
            return;
        };

        let next = active.opposite();
        self.phase = GamePhase::Hinting;
        self.active_team = Some(next);
        debug!("turn passes from {active} to {next}");

        self.notify_phase();
    }

    /// Declare the first competing team with no words left the winner.
    fn check_win(&mut self) -> bool {
        let cleared = Team::COMPETING
            .into_iter()
            .find(|&team| self.board.team_words(team).is_cleared());

        match cleared {
            Some(team) => {
                self.declare_winner(team);
                true
            }
            None => false,
        }
    }

    fn declare_winner(&mut self, team: Team) {
        self.phase = GamePhase::PostGame;
        self.winner = Some(team);
        info!("game over: {team} wins");

        self.notify_phase();
    }

    fn notify_phase(&mut self) {
        match self.phase {
            GamePhase::PreGame => {}
            GamePhase::PostGame => {
                if let Some(winner) = self.winner {
                    let view = self.board.view();
                    self.sink.game_won(winner, &view);
                }
            }
            GamePhase::Hinting => {
                let Some(active) = self.active_team else {
                    return;
                };
                if let Some(giver) = self.hint_giver(active) {
                    let key = self.board.key_card();
                    self.sink.turn_began_hinting(active, &giver);
                    self.sink.hint_giver_briefed(&giver, &key);
                }
            }
            GamePhase::Guessing => {
                let (Some(active), Some(hint)) = (self.active_team, self.current_hint.clone()) else {
                    return;
                };
                let guessers: Vec<Player> = self.teams[Team::Neutral]
                    .guessers()
                    .chain(self.teams[active].guessers())
                    .filter_map(|id| self.players.get(id).cloned())
                    .collect();
                self.sink
                    .turn_began_guessing(active, &guessers, &hint, self.remaining_guesses);
            }
        }
    }

    fn require_phase(&self, phase: GamePhase, action: &str) -> Result<()> {
        if self.phase != phase {
            return Err(GameError::wrong_phase(action, self.phase));
        }
        Ok(())
    }

    /// Check the phase and return the active team.
    fn require_turn(&self, phase: GamePhase, action: &str) -> Result<Team> {
        self.require_phase(phase, action)?;
        self.active_team
            .ok_or_else(|| GameError::wrong_phase(action, self.phase))
    }

    /// Guessing and stopping are open to the active team and Neutral, but
    /// never to a hint-giver.
    fn require_guesser(&self, actor: PlayerId, active: Team) -> Result<&Player> {
        let player = self.players.player(actor)?;
        let team = player
            .team
            .filter(|&t| t == active || t == Team::Neutral)
            .ok_or_else(|| GameError::NotYourTurn {
                player: player.name().to_string(),
                team: active,
            })?;

        if self.teams[team].is_hint_giver(actor) {
            return Err(GameError::HintGiverCannotGuess);
        }
        Ok(player)
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id)
            .ok_or_else(|| GameError::PlayerNotFound(id.to_string()))
    }

    fn hint_giver(&self, team: Team) -> Option<Player> {
        self.teams[team]
            .hint_giver()
            .and_then(|id| self.players.get(id))
            .cloned()
    }

    fn rosters(&self) -> TeamMap<Roster> {
        TeamMap::new(|team| Roster {
            hint_giver: self.hint_giver(team),
            guessers: self.teams[team]
                .guessers()
                .filter_map(|id| self.players.get(id).cloned())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordLayout;
    use crate::events::{Notification, RecordingSink};

    fn lobby(names: &[&str]) -> Game<RecordingSink> {
        let mut game = Game::new(RecordingSink::new(), 42);
        for name in names {
            game.join(name, None).unwrap();
        }
        game
    }

    fn started(names: &[&str]) -> Game<RecordingSink> {
        let mut game = lobby(names);
        game.start_game().unwrap();
        game
    }

    fn off_table_clue(game: &Game<RecordingSink>) -> &'static str {
        ["Zebra", "Quasar", "Nebula"]
            .into_iter()
            .find(|c| game.board().find_on_table(c).is_none())
            .unwrap()
    }

    #[test]
    fn test_join_twice_fails() {
        let mut game = lobby(&["tris"]);
        assert_eq!(
            game.join("tris", None).unwrap_err(),
            GameError::DuplicateName("tris".to_string())
        );
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn test_pre_game_join_keeps_preference() {
        let mut game = lobby(&[]);
        let id = game.join("tris", Some(Team::Second)).unwrap();
        assert_eq!(game.players().player(id).unwrap().team, Some(Team::Second));
        assert!(game.roster(Team::Second).is_empty());
    }

    #[test]
    fn test_leave_only_before_start() {
        let mut game = lobby(&["a", "b", "c", "d"]);
        game.leave("d").unwrap();
        assert_eq!(
            game.leave("d").unwrap_err(),
            GameError::PlayerNotFound("d".to_string())
        );

        game.start_game().unwrap();
        assert_eq!(
            game.leave("a").unwrap_err(),
            GameError::wrong_phase("leave", GamePhase::Hinting)
        );
    }

    #[test]
    fn test_start_needs_three_players() {
        let mut game = lobby(&["a", "b"]);
        assert_eq!(
            game.start_game().unwrap_err(),
            GameError::InsufficientPlayers {
                required: 3,
                joined: 2
            }
        );
        assert_eq!(game.phase(), GamePhase::PreGame);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut game = started(&["a", "b", "c", "d"]);
        assert_eq!(
            game.start_game().unwrap_err(),
            GameError::wrong_phase("start", GamePhase::Hinting)
        );
    }

    #[test]
    fn test_start_downgrades_small_versus() {
        let game = started(&["a", "b", "c"]);
        assert_eq!(game.mode(), GameMode::ThreeTeam);
        assert_eq!(game.roster(Team::First).len(), 1);
        assert_eq!(game.roster(Team::Second).len(), 1);
        assert_eq!(game.roster(Team::Neutral).len(), 1);
    }

    #[test]
    fn test_custom_layout_and_small_pool() {
        let config = GameConfig {
            layout: WordLayout {
                first: 1,
                second: 1,
                neutral: 0,
            },
            ..GameConfig::default()
        };
        let pool = WordPool::new(["a", "b", "c"]);
        let mut game = Game::with_config(RecordingSink::new(), 1, config, pool).unwrap();
        for name in ["a", "b", "c"] {
            game.join(name, Some(Team::First)).unwrap();
        }
        game.start_game().unwrap();
        assert_eq!(game.board().table().len(), 3);

        let pool = WordPool::new(["a", "b"]);
        let err = Game::with_config(NullSink, 1, GameConfig::default(), pool).err();
        assert_eq!(
            err,
            Some(GameError::ResourceExhausted {
                required: 25,
                available: 2
            })
        );
    }

    #[test]
    fn test_start_notifications() {
        let game = started(&["a", "b", "c", "d"]);
        let notifications = game.sink().notifications();

        let start = notifications
            .iter()
            .position(|n| matches!(n, Notification::GameStarted { .. }))
            .unwrap();
        assert!(matches!(
            notifications[start + 1],
            Notification::HintGiverBriefed { .. }
        ));
        assert!(matches!(
            notifications[start + 2],
            Notification::TurnBeganHinting { team: Team::First, .. }
        ));
        assert!(matches!(
            notifications.last(),
            Some(Notification::HintGiverBriefed { .. })
        ));
    }

    #[test]
    fn test_hint_rejects_wrong_actor() {
        let mut game = started(&["a", "b", "c", "d"]);
        let first_giver = game.roster(Team::First).hint_giver().unwrap();
        let second_giver = game.roster(Team::Second).hint_giver().unwrap();
        let first_guesser = game.roster(Team::First).guessers().next().unwrap();
        let clue = off_table_clue(&game);

        assert!(matches!(
            game.hint(second_giver, clue, HintCount::Finite(1)),
            Err(GameError::NotYourTurn { team: Team::First, .. })
        ));
        assert_eq!(
            game.hint(first_guesser, clue, HintCount::Finite(1)),
            Err(GameError::NotHintGiver)
        );
        assert_eq!(game.phase(), GamePhase::Hinting);

        game.hint(first_giver, clue, HintCount::Finite(1)).unwrap();
        assert_eq!(game.phase(), GamePhase::Guessing);
    }

    #[test]
    fn test_hint_rejects_table_word_and_large_count() {
        let mut game = started(&["a", "b", "c", "d"]);
        let giver = game.roster(Team::First).hint_giver().unwrap();
        let table_word = game.board().table()[0].to_uppercase();
        let clue = off_table_clue(&game);

        assert!(matches!(
            game.hint(giver, &table_word, HintCount::Finite(1)),
            Err(GameError::ClueOnTable(_))
        ));
        assert_eq!(
            game.hint(giver, clue, HintCount::Finite(10)),
            Err(GameError::InvalidHintCount { remaining: 9 })
        );
        assert_eq!(game.hint(giver, "  ", HintCount::Finite(1)), Err(GameError::EmptyClue));
        assert_eq!(game.phase(), GamePhase::Hinting);
        assert!(game.current_hint().is_none());

        game.hint(giver, clue, HintCount::Finite(9)).unwrap();
        assert_eq!(game.remaining_guesses(), GuessBudget::Finite(10));
    }

    #[test]
    fn test_guess_outside_guessing_phase() {
        let mut game = started(&["a", "b", "c", "d"]);
        let guesser = game.roster(Team::First).guessers().next().unwrap();
        let word = game.board().table()[0].clone();

        assert_eq!(
            game.guess(guesser, &word),
            Err(GameError::wrong_phase("guess", GamePhase::Hinting))
        );
        assert_eq!(
            game.stop(guesser),
            Err(GameError::wrong_phase("stop guessing", GamePhase::Hinting))
        );
    }

    #[test]
    fn test_lobby_commands_only_before_start() {
        let mut game = lobby(&["a", "b", "c", "d"]);
        let a = game.player_id("a").unwrap();

        game.set_team_preference(a, Some(Team::Second)).unwrap();
        assert!(game.toggle_spymaster_preference(a).unwrap());
        game.set_mode(a, GameMode::ThreeTeam).unwrap();
        game.set_mode(a, GameMode::Versus).unwrap();

        game.start_game().unwrap();
        assert_eq!(game.roster(Team::Second).hint_giver(), Some(a));

        assert!(game.set_team_preference(a, None).is_err());
        assert!(game.toggle_spymaster_preference(a).is_err());
        assert!(game.set_mode(a, GameMode::ThreeTeam).is_err());
        assert_eq!(game.mode(), GameMode::Versus);
    }

    #[test]
    fn test_rename_mid_game_keeps_roles() {
        let mut game = started(&["a", "b", "c", "d"]);
        let giver = game.roster(Team::First).hint_giver().unwrap();
        let old_name = game.players().player(giver).unwrap().name().to_string();

        game.rename_player(&old_name, "renamed").unwrap();
        assert_eq!(game.player_id("renamed").unwrap(), giver);
        assert!(game.roster(Team::First).is_hint_giver(giver));

        let clue = off_table_clue(&game);
        game.hint(giver, clue, HintCount::Unlimited).unwrap();
        assert!(matches!(
            game.sink().notifications().iter().find(|n| matches!(n, Notification::PlayerRenamed { .. })),
            Some(Notification::PlayerRenamed { new_name, .. }) if new_name == "renamed"
        ));
    }

    #[test]
    fn test_join_after_game_over_fails() {
        let mut game = started(&["a", "b", "c", "d"]);
        let giver = game.roster(Team::First).hint_giver().unwrap();
        let guesser = game.roster(Team::First).guessers().next().unwrap();
        let clue = off_table_clue(&game);
        let assassin = game.board().assassin().to_string();

        game.hint(giver, clue, HintCount::Finite(1)).unwrap();
        game.guess(guesser, &assassin).unwrap();
        assert_eq!(game.phase(), GamePhase::PostGame);

        assert_eq!(
            game.join("late", None),
            Err(GameError::wrong_phase("join", GamePhase::PostGame))
        );
    }

    #[test]
    fn test_rejected_guess_leaves_board_and_sink_untouched() {
        let mut game = started(&["a", "b", "c", "d"]);
        let giver = game.roster(Team::First).hint_giver().unwrap();
        let clue = off_table_clue(&game);
        game.hint(giver, clue, HintCount::Finite(1)).unwrap();

        let board = game.board().clone();
        let recorded = game.sink().notifications().len();
        let word = game.board().team_words(Team::First).remaining()[0].clone();

        assert_eq!(
            game.guess(PlayerId::new(999), &word),
            Err(GameError::PlayerNotFound("Player 999".to_string()))
        );
        assert_eq!(game.guess(giver, &word), Err(GameError::HintGiverCannotGuess));
        assert_eq!(game.board(), &board);
        assert_eq!(game.sink().notifications().len(), recorded);
        assert_eq!(game.remaining_guesses(), GuessBudget::Finite(2));
    }
}
