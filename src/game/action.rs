//! Name-addressed actions for command layers.
//!
//! A transport parses a chat line into an [`Action`] and hands it to
//! [`Game::apply`] together with the sender's display name.

use serde::{Deserialize, Serialize};

use super::state::Game;
use crate::core::{GameMode, HintCount, PlayerId, Result, Team};
use crate::events::NotificationSink;
use crate::words::Owner;

/// A player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Join { team: Option<Team> },
    Leave,
    Rename { new_name: String },
    SetTeamPreference(Option<Team>),
    SetMode(GameMode),
    ToggleSpymasterPreference,
    Start,
    Hint { clue: String, count: HintCount },
    Guess(String),
    Stop,
}

/// What a successful action produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Done,
    Joined(PlayerId),
    SpymasterPreference(bool),
    Revealed(Owner),
}

impl<S: NotificationSink> Game<S> {
    /// Resolve `actor` by name and run `action` as them.
    pub fn apply(&mut self, actor: &str, action: Action) -> Result<ActionOutcome> {
        match action {
            Action::Join { team } => self.join(actor, team).map(ActionOutcome::Joined),
            Action::Leave => self.leave(actor).map(|()| ActionOutcome::Done),
            Action::Rename { new_name } => self
                .rename_player(actor, &new_name)
                .map(|()| ActionOutcome::Done),
            Action::Start => self.start_game().map(|()| ActionOutcome::Done),
            Action::SetTeamPreference(team) => {
                let id = self.player_id(actor)?;
                self.set_team_preference(id, team)?;
                Ok(ActionOutcome::Done)
            }
            Action::SetMode(mode) => {
                let id = self.player_id(actor)?;
                self.set_mode(id, mode)?;
                Ok(ActionOutcome::Done)
            }
            Action::ToggleSpymasterPreference => {
                let id = self.player_id(actor)?;
                self.toggle_spymaster_preference(id)
                    .map(ActionOutcome::SpymasterPreference)
            }
            Action::Hint { clue, count } => {
                let id = self.player_id(actor)?;
                self.hint(id, &clue, count)?;
                Ok(ActionOutcome::Done)
            }
            Action::Guess(word) => {
                let id = self.player_id(actor)?;
                self.guess(id, &word).map(ActionOutcome::Revealed)
            }
            Action::Stop => {
                let id = self.player_id(actor)?;
                self.stop(id)?;
                Ok(ActionOutcome::Done)
            }
        }
    }
}
