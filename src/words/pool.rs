//! Shuffled, non-repeating word draws.
//!
//! The pool keeps the full vocabulary plus a shuffled deck. `reshuffle`
//! rebuilds the deck from the whole vocabulary; `draw` consumes from the
//! deck so draws between reshuffles never repeat a word.

use rustc_hash::FxHashSet;

use super::title_case;
use super::vocabulary::DEFAULT_WORDS;
use crate::core::{GameError, GameRng, Result};

/// Source of table words.
///
/// ## Usage
///
/// ```
/// use codenames_engine::core::GameRng;
/// use codenames_engine::words::WordPool;
///
/// let mut pool = WordPool::new(["moon", "sun", "star", "Moon"]);
/// assert_eq!(pool.vocabulary_len(), 3);
///
/// let mut rng = GameRng::new(7);
/// pool.reshuffle(&mut rng);
///
/// let drawn = pool.draw(2).unwrap();
/// assert_eq!(drawn.len(), 2);
/// assert_eq!(pool.remaining(), 1);
/// assert!(pool.draw(2).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct WordPool {
    vocabulary: Vec<String>,
    deck: Vec<String>,
}

impl WordPool {
    /// Build a pool from any word list.
    ///
    /// Words are title-cased and deduplicated, keeping first occurrences.
    /// Blank entries are dropped. The deck starts unshuffled.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let vocabulary: Vec<String> = words
            .into_iter()
            .map(|w| title_case(w.as_ref().trim()))
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();

        Self {
            deck: vocabulary.clone(),
            vocabulary,
        }
    }

    /// Pool over the built-in vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }

    /// Number of distinct words known to the pool.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Words left to draw before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Check a full reshuffle could supply `required` words.
    pub fn ensure_capacity(&self, required: usize) -> Result<()> {
        if self.vocabulary.len() < required {
            return Err(GameError::ResourceExhausted {
                required,
                available: self.vocabulary.len(),
            });
        }
        Ok(())
    }

    /// Refill the deck with the whole vocabulary in a fresh random order.
    pub fn reshuffle(&mut self, rng: &mut GameRng) {
        self.deck.clone_from(&self.vocabulary);
        rng.shuffle(&mut self.deck);
    }

    /// Remove and return `n` words from the deck.
    ///
    /// Fails without consuming anything if fewer than `n` remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<String>> {
        if self.deck.len() < n {
            return Err(GameError::ResourceExhausted {
                required: n,
                available: self.deck.len(),
            });
        }
        Ok(self.deck.drain(..n).collect())
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_and_dedups() {
        let pool = WordPool::new(["ice", "ICE", "  fire ", "", "Fire", "water"]);
        assert_eq!(pool.vocabulary, vec!["Ice", "Fire", "Water"]);
    }

    #[test]
    fn test_draws_never_repeat() {
        let mut pool = WordPool::standard();
        let mut rng = GameRng::new(42);
        pool.reshuffle(&mut rng);

        let mut seen = FxHashSet::default();
        for _ in 0..10 {
            for word in pool.draw(25).unwrap() {
                assert!(seen.insert(word));
            }
        }
        assert_eq!(pool.remaining(), pool.vocabulary_len() - 250);
    }

    #[test]
    fn test_reshuffle_restores_vocabulary() {
        let mut pool = WordPool::new(["a", "b", "c"]);
        let mut rng = GameRng::new(1);
        pool.reshuffle(&mut rng);

        let _ = pool.draw(3).unwrap();
        assert_eq!(pool.remaining(), 0);

        pool.reshuffle(&mut rng);
        let mut words = pool.draw(3).unwrap();
        words.sort();
        assert_eq!(words, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_failed_draw_consumes_nothing() {
        let mut pool = WordPool::new(["a", "b"]);
        assert_eq!(
            pool.draw(3).unwrap_err(),
            GameError::ResourceExhausted {
                required: 3,
                available: 2
            }
        );
        assert_eq!(pool.remaining(), 2);
    }

    #[test]
    fn test_ensure_capacity() {
        let pool = WordPool::new(["a", "b"]);
        assert!(pool.ensure_capacity(2).is_ok());
        assert!(pool.ensure_capacity(25).is_err());
        assert!(WordPool::standard().ensure_capacity(25).is_ok());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = WordPool::standard();
        let mut b = WordPool::standard();
        a.reshuffle(&mut GameRng::new(9));
        b.reshuffle(&mut GameRng::new(9));
        assert_eq!(a.draw(25).unwrap(), b.draw(25).unwrap());
    }
}
