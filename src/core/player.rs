//! Player identification and per-player preferences.
//!
//! ## PlayerId
//!
//! Stable identifier assigned at join. Display names can change (nick
//! changes on the chat channel) without touching the id, so team rosters
//! and in-flight references keep pointing at the same participant.
//!
//! ## Player
//!
//! Display name, team (a preference before assignment, the resolved team
//! after), and the hint-giver preference toggle.

use serde::{Deserialize, Serialize};

use super::team::Team;

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Preferred team before the game, resolved team once assigned.
    pub team: Option<Team>,
    /// Wants to be a hint-giver.
    pub wants_spymaster: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            team: None,
            wants_spymaster: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the display name. Identity is unaffected.
    ///
    /// Callers holding a registry should go through `PlayerRegistry::rename`
    /// so the name index stays in sync.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    /// Flip the hint-giver preference, returning the new value.
    pub fn toggle_spymaster_preference(&mut self) -> bool {
        self.wants_spymaster = !self.wants_spymaster;
        self.wants_spymaster
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_keeps_identity() {
        let mut p = Player::new(PlayerId::new(7), "tris");
        assert_eq!(p.name(), "tris");

        p.rename("nottris");
        assert_eq!(p.name(), "nottris");
        assert_eq!(p.id(), PlayerId::new(7));
    }

    #[test]
    fn test_toggle_spymaster_preference() {
        let mut p = Player::new(PlayerId::new(0), "tris");
        assert!(!p.wants_spymaster);

        assert!(p.toggle_spymaster_preference());
        assert!(p.wants_spymaster);

        p.toggle_spymaster_preference();
        p.toggle_spymaster_preference();
        assert!(p.wants_spymaster);
    }

    #[test]
    fn test_display_uses_name() {
        let p = Player::new(PlayerId::new(3), "claire");
        assert_eq!(p.to_string(), "claire");
        assert_eq!(p.id().to_string(), "Player 3");
    }
}
