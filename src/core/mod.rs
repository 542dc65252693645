/// Card values, suits, and the card itself.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// Errors from parsing cards and hands.
mod error;
/// Export `ParseError`
pub use self::error::ParseError;

/// The five card hand with its cached counts.
mod hand;
/// Export `FiveCardHand`
pub use self::hand::{FiveCardHand, HAND_SIZE};

/// Hand categories and the classifier.
mod rank;
/// Export the classifier and its output.
pub use self::rank::{Category, HandScore, TieBreak, classify};

/// Deciding the winner between two scored hands.
mod compare;
/// Export the comparator.
pub use self::compare::{Winner, compare, compare_hands};

/// Enumerate every five card hand from a set of cards.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;
