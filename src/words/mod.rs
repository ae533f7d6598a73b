//! Vocabulary, word pool, and the dealt table.
//!
//! - [`WordPool`]: shuffled draws without replacement
//! - [`Board`]: the table of live words and per-team [`TeamWords`]
//! - [`KeyCard`] / [`BoardView`]: read-only views handed to collaborators
//!
//! Table words are stored title-cased; player input is matched
//! case-insensitively against them.

mod board;
mod pool;
mod vocabulary;

pub use board::{Board, BoardView, KeyCard, Owner, TeamWords};
pub use pool::WordPool;
pub use vocabulary::DEFAULT_WORDS;

/// Title-case a word: first letter of each alphabetic run upper, the rest lower.
///
/// ```
/// use codenames_engine::words::title_case;
///
/// assert_eq!(title_case("ice cream"), "Ice Cream");
/// assert_eq!(title_case("NEW YORK"), "New York");
/// assert_eq!(title_case("t-rex"), "T-Rex");
/// ```
#[must_use]
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for c in word.chars() {
        if c.is_alphabetic() {
            if at_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_start = false;
        } else {
            out.push(c);
            at_start = true;
        }
    }
    out
}
