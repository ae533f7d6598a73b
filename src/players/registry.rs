//! Player registry for by-name lookup.
//!
//! Players are keyed by a stable `PlayerId`; a separate name index maps the
//! current display name to that id. Renaming only rewrites the index, so
//! every stored `PlayerId` (team rosters, hint-givers) stays valid.

use rustc_hash::FxHashMap;

use crate::core::{GameError, GameRng, Player, PlayerId, Result};

/// Joined participants, in join order.
///
/// ## Example
///
/// ```
/// use codenames_engine::players::PlayerRegistry;
///
/// let mut registry = PlayerRegistry::new();
/// let tris = registry.add("tris").unwrap();
///
/// registry.rename(tris, "nottris").unwrap();
/// assert_eq!(registry.id_of("nottris").unwrap(), tris);
/// assert!(!registry.contains("tris"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: FxHashMap<PlayerId, Player>,
    by_name: FxHashMap<String, PlayerId>,
    order: Vec<PlayerId>,
    next_id: u32,
}

impl PlayerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player, returning its id.
    pub fn add(&mut self, name: &str) -> Result<PlayerId> {
        if self.by_name.contains_key(name) {
            return Err(GameError::DuplicateName(name.to_string()));
        }

        let id = PlayerId::new(self.next_id);
        self.next_id += 1;

        self.players.insert(id, Player::new(id, name));
        self.by_name.insert(name.to_string(), id);
        self.order.push(id);
        Ok(id)
    }

    /// Remove a player by name, returning it.
    pub fn remove(&mut self, name: &str) -> Result<Player> {
        let id = self.id_of(name)?;
        self.by_name.remove(name);
        self.order.retain(|&p| p != id);
        self.players
            .remove(&id)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    /// Resolve a display name to an id.
    pub fn id_of(&self, name: &str) -> Result<PlayerId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    /// Look up a player by display name.
    pub fn lookup(&self, name: &str) -> Result<&Player> {
        let id = self.id_of(name)?;
        self.player(id)
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(&id)
            .ok_or_else(|| GameError::PlayerNotFound(id.to_string()))
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Change a player's display name, returning the old one.
    ///
    /// Renaming to the current name is a no-op.
    pub fn rename(&mut self, id: PlayerId, new_name: &str) -> Result<String> {
        let old_name = self.player(id)?.name().to_string();
        if old_name == new_name {
            return Ok(old_name);
        }
        if self.by_name.contains_key(new_name) {
            return Err(GameError::DuplicateName(new_name.to_string()));
        }

        self.by_name.remove(&old_name);
        self.by_name.insert(new_name.to_string(), id);
        if let Some(player) = self.players.get_mut(&id) {
            player.rename(new_name);
        }
        Ok(old_name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.order.iter().filter_map(|id| self.players.get(id))
    }

    /// Randomly ordered copy of the ids. Registry order is untouched.
    #[must_use]
    pub fn shuffled_snapshot(&self, rng: &mut GameRng) -> Vec<PlayerId> {
        let mut ids = self.order.clone();
        rng.shuffle(&mut ids);
        ids
    }
}
