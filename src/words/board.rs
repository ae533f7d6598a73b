//! The table of words and who owns them.
//!
//! Each team's words live in one `TeamWords` value, so the
//! assigned/remaining/revealed partition is kept by the type rather than by
//! three maps that must be updated together.

use serde::{Deserialize, Serialize};

use super::pool::WordPool;
use crate::core::{GameError, GameRng, Result, Team, TeamMap, WordLayout};

/// Words owned by one team.
///
/// Invariant: `remaining` and `revealed` are disjoint and together hold
/// exactly the words in `assigned`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWords {
    assigned: Vec<String>,
    remaining: Vec<String>,
    revealed: Vec<String>,
}

impl TeamWords {
    #[must_use]
    pub fn new(assigned: Vec<String>) -> Self {
        Self {
            remaining: assigned.clone(),
            assigned,
            revealed: Vec::new(),
        }
    }

    #[must_use]
    pub fn assigned(&self) -> &[String] {
        &self.assigned
    }

    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    #[must_use]
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    #[must_use]
    pub fn owns(&self, word: &str) -> bool {
        self.assigned.iter().any(|w| w == word)
    }

    /// All of this team's words have been revealed.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Move a word from remaining to revealed. Returns false if it wasn't remaining.
    fn reveal(&mut self, word: &str) -> bool {
        match self.remaining.iter().position(|w| w == word) {
            Some(idx) => {
                let word = self.remaining.remove(idx);
                self.revealed.push(word);
                true
            }
            None => false,
        }
    }
}

/// Who a table word belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// A team's word. `Team::Neutral` means a civilian.
    Team(Team),
    Assassin,
}

/// The hint-giver's key: every unrevealed word by owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCard {
    pub assassin: String,
    pub remaining: TeamMap<Vec<String>>,
}

/// Full ownership of every dealt word, for end-of-game reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub assassin: String,
    pub assassin_revealed: bool,
    pub assigned: TeamMap<Vec<String>>,
    pub revealed: TeamMap<Vec<String>>,
}

/// Words in play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    words: TeamMap<TeamWords>,
    assassin: String,
    assassin_revealed: bool,
    /// Unrevealed words in display order.
    table: Vec<String>,
}

impl Board {
    /// Reshuffle the pool and deal a fresh table.
    ///
    /// Fails before touching the pool if it can't cover the layout.
    pub fn deal(pool: &mut WordPool, layout: WordLayout, rng: &mut GameRng) -> Result<Self> {
        pool.ensure_capacity(layout.total())?;
        pool.reshuffle(rng);

        let first = pool.draw(layout.count(Team::First))?;
        let second = pool.draw(layout.count(Team::Second))?;
        let neutral = pool.draw(layout.count(Team::Neutral))?;
        let assassin = pool.draw(1)?.pop().ok_or(GameError::ResourceExhausted {
            required: 1,
            available: 0,
        })?;

        let mut table: Vec<String> = first
            .iter()
            .chain(&second)
            .chain(&neutral)
            .cloned()
            .chain(std::iter::once(assassin.clone()))
            .collect();
        rng.shuffle(&mut table);

        let words = TeamMap::from_array([
            TeamWords::new(first),
            TeamWords::new(second),
            TeamWords::new(neutral),
        ]);

        Ok(Self {
            words,
            assassin,
            assassin_revealed: false,
            table,
        })
    }

    /// Unrevealed words in display order, assassin included until revealed.
    #[must_use]
    pub fn table(&self) -> &[String] {
        &self.table
    }

    #[must_use]
    pub fn team_words(&self, team: Team) -> &TeamWords {
        &self.words[team]
    }

    #[must_use]
    pub fn assassin(&self) -> &str {
        &self.assassin
    }

    #[must_use]
    pub fn assassin_revealed(&self) -> bool {
        self.assassin_revealed
    }

    /// Find the table word a player typed, ignoring case.
    #[must_use]
    pub fn find_on_table(&self, word: &str) -> Option<&str> {
        let wanted = word.trim().to_lowercase();
        self.table
            .iter()
            .find(|w| w.to_lowercase() == wanted)
            .map(String::as_str)
    }

    #[must_use]
    pub fn owner_of(&self, word: &str) -> Option<Owner> {
        if word == self.assassin {
            return Some(Owner::Assassin);
        }
        Team::ALL
            .into_iter()
            .find(|&team| self.words[team].owns(word))
            .map(Owner::Team)
    }

    /// Take a word off the table and mark it revealed for its owner.
    ///
    /// `word` must match a table word exactly; use `find_on_table` first.
    pub fn reveal(&mut self, word: &str) -> Result<Owner> {
        let idx = self
            .table
            .iter()
            .position(|w| w == word)
            .ok_or_else(|| GameError::WordNotOnTable(word.to_string()))?;
        let owner = self
            .owner_of(word)
            .ok_or_else(|| GameError::WordNotOnTable(word.to_string()))?;

        self.table.remove(idx);
        match owner {
            Owner::Assassin => self.assassin_revealed = true,
            Owner::Team(team) => {
                self.words[team].reveal(word);
            }
        }
        Ok(owner)
    }

    #[must_use]
    pub fn key_card(&self) -> KeyCard {
        KeyCard {
            assassin: self.assassin.clone(),
            remaining: TeamMap::new(|team| self.words[team].remaining.clone()),
        }
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            assassin: self.assassin.clone(),
            assassin_revealed: self.assassin_revealed,
            assigned: TeamMap::new(|team| self.words[team].assigned.clone()),
            revealed: TeamMap::new(|team| self.words[team].revealed.clone()),
        }
    }
}
