//! Hint counts and guess budgets.
//!
//! Both carry an explicit `Unlimited` case instead of a sentinel value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Number of words a hint refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintCount {
    Finite(u32),
    Unlimited,
}

impl HintCount {
    /// Build a count from a signed integer, rejecting negatives.
    pub fn from_signed(n: i64) -> Result<Self, GameError> {
        u32::try_from(n)
            .map(HintCount::Finite)
            .map_err(|_| GameError::MalformedHintCount(n.to_string()))
    }

    /// Guess budget granted by a hint with this count.
    ///
    /// A finite count `n > 0` grants `n + 1` guesses. Zero and unlimited
    /// both grant unlimited guessing.
    ///
    /// ```
    /// use codenames_engine::core::{GuessBudget, HintCount};
    ///
    /// assert_eq!(HintCount::Finite(2).budget(), GuessBudget::Finite(3));
    /// assert_eq!(HintCount::Finite(0).budget(), GuessBudget::Unlimited);
    /// assert_eq!(HintCount::Unlimited.budget(), GuessBudget::Unlimited);
    /// ```
    #[must_use]
    pub fn budget(self) -> GuessBudget {
        match self {
            HintCount::Finite(0) | HintCount::Unlimited => GuessBudget::Unlimited,
            HintCount::Finite(n) => GuessBudget::Finite(n.saturating_add(1)),
        }
    }
}

impl std::fmt::Display for HintCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintCount::Finite(n) => write!(f, "{n}"),
            HintCount::Unlimited => write!(f, "unlimited"),
        }
    }
}

impl FromStr for HintCount {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "unlimited" | "infinity" | "infty" | "inf" => Ok(HintCount::Unlimited),
            other => other
                .parse::<i64>()
                .map_err(|_| GameError::MalformedHintCount(s.to_string()))
                .and_then(HintCount::from_signed),
        }
    }
}

/// Guesses the active team may still make this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessBudget {
    Finite(u32),
    Unlimited,
}

impl GuessBudget {
    /// Spend one guess. Unlimited budgets never change.
    #[must_use]
    pub fn spend(self) -> GuessBudget {
        match self {
            GuessBudget::Finite(n) => GuessBudget::Finite(n.saturating_sub(1)),
            GuessBudget::Unlimited => GuessBudget::Unlimited,
        }
    }

    /// No guesses left.
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        self == GuessBudget::Finite(0)
    }
}

impl Default for GuessBudget {
    fn default() -> Self {
        GuessBudget::Finite(0)
    }
}

impl std::fmt::Display for GuessBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessBudget::Finite(n) => write!(f, "{n}"),
            GuessBudget::Unlimited => write!(f, "unlimited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        assert_eq!("3".parse::<HintCount>().unwrap(), HintCount::Finite(3));
        assert_eq!("0".parse::<HintCount>().unwrap(), HintCount::Finite(0));
        assert_eq!("INF".parse::<HintCount>().unwrap(), HintCount::Unlimited);
        assert_eq!("infinity".parse::<HintCount>().unwrap(), HintCount::Unlimited);
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        assert_eq!(
            "-1".parse::<HintCount>().unwrap_err(),
            GameError::MalformedHintCount("-1".to_string())
        );
        assert!("two".parse::<HintCount>().is_err());
        assert!(HintCount::from_signed(-4).is_err());
    }

    #[test]
    fn test_spend() {
        let budget = HintCount::Finite(1).budget();
        assert_eq!(budget, GuessBudget::Finite(2));

        let budget = budget.spend();
        assert!(!budget.is_exhausted());
        assert!(budget.spend().is_exhausted());

        assert_eq!(GuessBudget::Unlimited.spend(), GuessBudget::Unlimited);
        assert!(!GuessBudget::Unlimited.is_exhausted());
    }
}
