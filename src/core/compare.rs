use std::cmp::Ordering;
use std::fmt;

use super::hand::FiveCardHand;
use super::rank::HandScore;

/// Which side of a heads up showdown took the pot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winner {
    FirstHand,
    SecondHand,
    /// Same category and the same tie break key. This is a real outcome,
    /// for example two royal flushes.
    Tie,
}

impl Winner {
    /// The result as seen from the other seat.
    pub fn swap(self) -> Self {
        match self {
            Winner::FirstHand => Winner::SecondHand,
            Winner::SecondHand => Winner::FirstHand,
            Winner::Tie => Winner::Tie,
        }
    }

    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Winner::FirstHand,
            Ordering::Less => Winner::SecondHand,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::FirstHand => f.write_str("Player 1"),
            Winner::SecondHand => f.write_str("Player 2"),
            Winner::Tie => f.write_str("Tie"),
        }
    }
}

/// Decide which of two scores wins.
///
/// The category decides outright. Otherwise the tie break keys are
/// compared value by value and the first difference decides. Keys that
/// match all the way through are a tie.
pub fn compare(first: &HandScore, second: &HandScore) -> Winner {
    let ordering = first
        .category()
        .cmp(&second.category())
        .then_with(|| first.tie_break().cmp(second.tie_break()));
    Winner::from_ordering(ordering)
}

/// Score both hands and decide which one wins.
///
/// # Examples
/// ```
/// use poker_showdown::core::{compare_hands, FiveCardHand, Winner};
///
/// let first = FiveCardHand::new_from_str("5H 5C 6S 7S KD").unwrap();
/// let second = FiveCardHand::new_from_str("2C 3S 8S 8D TD").unwrap();
/// assert_eq!(Winner::SecondHand, compare_hands(&first, &second));
/// ```
pub fn compare_hands(first: &FiveCardHand, second: &FiveCardHand) -> Winner {
    compare(&first.score(), &second.score())
}
