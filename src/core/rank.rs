use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::card::Value;
use super::hand::{FiveCardHand, HAND_SIZE};

/// All the different possible hand categories, weakest first.
///
/// The discriminant is the ordinal of the category, `HighCard` is 1 and
/// `RoyalFlush` is 10.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// The lowest category.
    /// No matches
    HighCard = 1,
    /// One Card matches another.
    OnePair = 2,
    /// Two different pair of matching cards.
    TwoPair = 3,
    /// Three of the same value.
    ThreeOfAKind = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Five cards of the same suit
    Flush = 6,
    /// Three of one value and two of another value
    FullHouse = 7,
    /// Four of the same value.
    FourOfAKind = 8,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 9,
    /// Ten through ace all of the same suit.
    RoyalFlush = 10,
}

impl Category {
    /// The ordinal in `[1, 10]`.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// How many values the tie break key for this category holds.
    pub const fn tie_break_len(self) -> usize {
        match self {
            Category::RoyalFlush => 0,
            Category::StraightFlush | Category::Flush | Category::Straight => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            Category::HighCard => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Ordered values used to separate two hands of the same category.
///
/// Keys compare lexicographically. Only the first `len()` slots are
/// meaningful; the rest are never looked at.
#[derive(Debug, Clone, Copy)]
pub struct TieBreak {
    values: [Value; HAND_SIZE],
    len: u8,
}

impl TieBreak {
    /// A key with nothing in it.
    pub const fn empty() -> Self {
        Self {
            values: [Value::Two; HAND_SIZE],
            len: 0,
        }
    }

    /// Build a key from values in priority order.
    ///
    /// Anything past five values is ignored since no hand has more cards
    /// than that.
    pub fn from_values<I: IntoIterator<Item = Value>>(values: I) -> Self {
        values.into_iter().fold(Self::empty(), Self::push)
    }

    fn push(mut self, value: Value) -> Self {
        if (self.len as usize) < HAND_SIZE {
            self.values[self.len as usize] = value;
            self.len += 1;
        }
        self
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The key as value ordinals.
    pub fn ordinals(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_slice().iter().map(|v| v.ordinal())
    }
}

impl PartialEq for TieBreak {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TieBreak {}

impl Hash for TieBreak {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TieBreak {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// The result of classifying a hand.
///
/// Ordering is by category first and then by tie break key, so comparing
/// two scores directly gives the stronger hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct HandScore {
    category: Category,
    tie_break: TieBreak,
}

impl HandScore {
    pub fn new(category: Category, tie_break: TieBreak) -> Self {
        Self {
            category,
            tie_break,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tie_break(&self) -> &TieBreak {
        &self.tie_break
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.tie_break.is_empty() {
            f.write_str(" (")?;
            for (idx, v) in self.tie_break.as_slice().iter().enumerate() {
                if idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", v.to_char())?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A rule recognises one category and builds its tie break key.
type Rule = fn(&FiveCardHand) -> Option<TieBreak>;

/// Rules from strongest to weakest. Several of these overlap (every straight
/// flush is also a flush) so they must be tried in exactly this order.
/// High card is the fallback when nothing here matches.
const RULES: [(Category, Rule); 9] = [
    (Category::RoyalFlush, royal_flush),
    (Category::StraightFlush, straight_flush),
    (Category::FourOfAKind, four_of_a_kind),
    (Category::FullHouse, full_house),
    (Category::Flush, flush),
    (Category::Straight, straight),
    (Category::ThreeOfAKind, three_of_a_kind),
    (Category::TwoPair, two_pair),
    (Category::OnePair, one_pair),
];

const BROADWAY: [Value; HAND_SIZE] = [
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

fn royal_flush(hand: &FiveCardHand) -> Option<TieBreak> {
    (hand.is_single_suit() && *hand.sorted_values() == BROADWAY).then(TieBreak::empty)
}

fn straight_flush(hand: &FiveCardHand) -> Option<TieBreak> {
    (hand.is_single_suit() && hand.is_consecutive())
        .then(|| TieBreak::from_values([hand.high_value()]))
}

fn four_of_a_kind(hand: &FiveCardHand) -> Option<TieBreak> {
    let quads = hand.values_with_count(4).next()?;
    Some(TieBreak::from_values(
        std::iter::once(quads).chain(kickers(hand)),
    ))
}

fn full_house(hand: &FiveCardHand) -> Option<TieBreak> {
    let set = hand.values_with_count(3).next()?;
    let pair = hand.values_with_count(2).next()?;
    Some(TieBreak::from_values([set, pair]))
}

fn flush(hand: &FiveCardHand) -> Option<TieBreak> {
    hand.is_single_suit()
        .then(|| TieBreak::from_values([hand.high_value()]))
}

fn straight(hand: &FiveCardHand) -> Option<TieBreak> {
    hand.is_consecutive()
        .then(|| TieBreak::from_values([hand.high_value()]))
}

fn three_of_a_kind(hand: &FiveCardHand) -> Option<TieBreak> {
    let set = hand.values_with_count(3).next()?;
    Some(TieBreak::from_values(
        std::iter::once(set).chain(kickers(hand)),
    ))
}

fn two_pair(hand: &FiveCardHand) -> Option<TieBreak> {
    let mut pairs = hand.values_with_count(2);
    let (Some(low), Some(high), None) = (pairs.next(), pairs.next(), pairs.next()) else {
        return None;
    };
    // The lower pair leads the key.
    Some(TieBreak::from_values(
        [low, high].into_iter().chain(kickers(hand)),
    ))
}

fn one_pair(hand: &FiveCardHand) -> Option<TieBreak> {
    let mut pairs = hand.values_with_count(2);
    let (Some(pair), None) = (pairs.next(), pairs.next()) else {
        return None;
    };
    Some(TieBreak::from_values(
        std::iter::once(pair).chain(kickers(hand)),
    ))
}

/// Every value in the hand, highest first.
fn high_card(hand: &FiveCardHand) -> TieBreak {
    TieBreak::from_values(hand.sorted_values().iter().rev().copied())
}

/// Unmatched values, highest first.
fn kickers(hand: &FiveCardHand) -> impl Iterator<Item = Value> + '_ {
    hand.values_with_count(1).rev()
}

/// Classify a five card hand.
///
/// This never fails. Every well formed hand lands in exactly one category,
/// whichever is the strongest that matches.
///
/// # Examples
/// ```
/// use poker_showdown::core::{classify, Category, FiveCardHand, Value};
///
/// let hand = FiveCardHand::new_from_str("5H 5C 6S 7S KD").unwrap();
/// let score = classify(&hand);
/// assert_eq!(Category::OnePair, score.category());
/// assert_eq!(
///     &[Value::Five, Value::King, Value::Seven, Value::Six],
///     score.tie_break().as_slice()
/// );
/// ```
pub fn classify(hand: &FiveCardHand) -> HandScore {
    RULES
        .iter()
        .find_map(|(category, rule)| rule(hand).map(|key| HandScore::new(*category, key)))
        .unwrap_or_else(|| HandScore::new(Category::HighCard, high_card(hand)))
}

impl FiveCardHand {
    /// Classify this hand. Nothing is cached so repeated calls repeat the
    /// work.
    pub fn score(&self) -> HandScore {
        classify(self)
    }
}
