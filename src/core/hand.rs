use std::fmt;
use std::str::FromStr;

use super::card::{Card, Suit, Value};
use super::error::ParseError;

/// Number of cards in every hand this crate scores.
pub const HAND_SIZE: usize = 5;

/// Exactly five cards, along with the counts needed to classify them.
///
/// Everything is computed once when the hand is built and never changes
/// after that, so a hand can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiveCardHand {
    cards: [Card; HAND_SIZE],
    /// value ordinal => number of cards with that value
    value_counts: [u8; 13],
    /// suit index => number of cards with that suit
    suit_counts: [u8; 4],
    /// Values of all five cards, lowest first.
    sorted_values: [Value; HAND_SIZE],
}

impl FiveCardHand {
    /// Build a hand from five cards. The cards are not checked for
    /// duplicates.
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        let mut value_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        for c in &cards {
            value_counts[c.value.ordinal() as usize] += 1;
            suit_counts[c.suit.index()] += 1;
        }

        let mut sorted_values = cards.map(|c| c.value);
        sorted_values.sort_unstable();

        Self {
            cards,
            value_counts,
            suit_counts,
            sorted_values,
        }
    }

    /// Parse a hand from individual card tokens.
    ///
    /// ```
    /// use poker_showdown::core::FiveCardHand;
    ///
    /// let hand = FiveCardHand::from_tokens(["5H", "5C", "6S", "7S", "KD"]).unwrap();
    /// assert_eq!(2, hand.value_count(poker_showdown::core::Value::Five));
    /// ```
    pub fn from_tokens<'a, I>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cards = tokens
            .into_iter()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(cards.as_slice())
    }

    /// Parse a hand from a string. The cards can be separated by
    /// whitespace, `"5H 5C 6S 7S KD"`, or written back to back,
    /// `"5H5C6S7SKD"`, or a mix of both. A single card never spans
    /// whitespace, so `"5 H5C6S7SKD"` is rejected.
    ///
    /// ```
    /// use poker_showdown::core::{FiveCardHand, ParseError};
    ///
    /// let spaced = FiveCardHand::new_from_str("TH JH QH KH AH").unwrap();
    /// let packed = FiveCardHand::new_from_str("THJHQHKHAH").unwrap();
    /// assert_eq!(spaced, packed);
    ///
    /// assert_eq!(
    ///     Err(ParseError::InvalidToken("T".to_string())),
    ///     FiveCardHand::new_from_str("T HJHQHKHAH")
    /// );
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, ParseError> {
        let mut cards = Vec::with_capacity(HAND_SIZE);

        for chunk in hand_string.split_whitespace() {
            let mut chars = chunk.chars();
            while let Some(vc) = chars.next() {
                let value = Value::from_char(vc).ok_or(ParseError::UnexpectedValueChar(vc))?;
                let sc = chars
                    .next()
                    .ok_or_else(|| ParseError::InvalidToken(vc.to_string()))?;
                let suit = Suit::from_char(sc).ok_or(ParseError::UnexpectedSuitChar(sc))?;
                cards.push(Card::new(value, suit));
            }
        }

        Self::try_from(cards.as_slice())
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// How many cards of this value are in the hand.
    pub fn value_count(&self, value: Value) -> u8 {
        self.value_counts[value.ordinal() as usize]
    }

    /// How many cards of this suit are in the hand.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit.index()]
    }

    /// The five values, lowest first.
    pub fn sorted_values(&self) -> &[Value; HAND_SIZE] {
        &self.sorted_values
    }

    /// The highest value in the hand.
    pub fn high_value(&self) -> Value {
        self.sorted_values[HAND_SIZE - 1]
    }

    /// True when every card shares a suit.
    pub fn is_single_suit(&self) -> bool {
        self.suit_counts.iter().any(|&c| c as usize == HAND_SIZE)
    }

    /// True when the sorted values form an unbroken run.
    ///
    /// Aces only count high, so `A 2 3 4 5` is not a run.
    pub fn is_consecutive(&self) -> bool {
        self.sorted_values
            .windows(2)
            .all(|w| w[1].ordinal() == w[0].ordinal() + 1)
    }

    /// Values that appear exactly `count` times, lowest first.
    pub fn values_with_count(&self, count: u8) -> impl DoubleEndedIterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .filter(move |v| self.value_count(*v) == count)
    }
}

impl TryFrom<&[Card]> for FiveCardHand {
    type Error = ParseError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| ParseError::WrongCardCount {
                expected: HAND_SIZE,
                found: cards.len(),
            })?;
        Ok(Self::new(cards))
    }
}

impl FromStr for FiveCardHand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl fmt::Display for FiveCardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_five() {
        let hand = FiveCardHand::new_from_str("5H5C6S7SKD").unwrap();
        let values: u8 = Value::values().iter().map(|v| hand.value_count(*v)).sum();
        let suits: u8 = Suit::suits().iter().map(|s| hand.suit_count(*s)).sum();
        assert_eq!(5, values);
        assert_eq!(5, suits);
        assert_eq!(2, hand.value_count(Value::Five));
        assert_eq!(2, hand.suit_count(Suit::Spade));
        assert_eq!(1, hand.suit_count(Suit::Diamond));
    }

    #[test]
    fn test_sorted_values() {
        let hand = FiveCardHand::new_from_str("KD 5H 7S 5C 6S").unwrap();
        assert_eq!(
            &[
                Value::Five,
                Value::Five,
                Value::Six,
                Value::Seven,
                Value::King
            ],
            hand.sorted_values()
        );
        assert_eq!(Value::King, hand.high_value());
        // Original order is kept for the cards themselves.
        assert_eq!("KD", hand.cards()[0].to_string());
    }

    #[test]
    fn test_single_suit() {
        assert!(FiveCardHand::new_from_str("2H3H4H5H7H").unwrap().is_single_suit());
        assert!(!FiveCardHand::new_from_str("2H3H4H5H7D").unwrap().is_single_suit());
    }

    #[test]
    fn test_consecutive() {
        assert!(FiveCardHand::new_from_str("2C3D4S5H6C").unwrap().is_consecutive());
        assert!(FiveCardHand::new_from_str("TCJDQSKHAC").unwrap().is_consecutive());
        assert!(!FiveCardHand::new_from_str("2C3D4S5H7C").unwrap().is_consecutive());
        assert!(!FiveCardHand::new_from_str("2C2D3S4H5C").unwrap().is_consecutive());
    }

    #[test]
    fn test_wheel_is_not_consecutive() {
        assert!(!FiveCardHand::new_from_str("AC2D3S4H5C").unwrap().is_consecutive());
    }

    #[test]
    fn test_values_with_count() {
        let hand = FiveCardHand::new_from_str("9H9C2S2DKD").unwrap();
        let pairs: Vec<Value> = hand.values_with_count(2).collect();
        assert_eq!(vec![Value::Two, Value::Nine], pairs);
        let high_first: Vec<Value> = hand.values_with_count(2).rev().collect();
        assert_eq!(vec![Value::Nine, Value::Two], high_first);
        assert_eq!(vec![Value::King], hand.values_with_count(1).collect::<Vec<_>>());
        assert_eq!(0, hand.values_with_count(3).count());
    }

    #[test]
    fn test_from_tokens() {
        let hand = FiveCardHand::from_tokens(["2C", "3S", "8S", "8D", "TD"]).unwrap();
        assert_eq!(2, hand.value_count(Value::Eight));
        assert_eq!(
            Err(ParseError::WrongCardCount {
                expected: 5,
                found: 4
            }),
            FiveCardHand::from_tokens(["2C", "3S", "8S", "8D"])
        );
        assert_eq!(
            Err(ParseError::UnexpectedSuitChar('Z')),
            FiveCardHand::from_tokens(["2C", "3S", "8S", "8D", "TZ"])
        );
    }

    #[test]
    fn test_new_from_str_errors() {
        assert_eq!(
            Err(ParseError::WrongCardCount {
                expected: 5,
                found: 6
            }),
            FiveCardHand::new_from_str("2C3S8S8DTD9D")
        );
        assert_eq!(
            Err(ParseError::InvalidToken("T".to_string())),
            FiveCardHand::new_from_str("2C3S8S8DT")
        );
        assert_eq!(
            Err(ParseError::UnexpectedValueChar('X')),
            FiveCardHand::new_from_str("XC3S8S8DTD")
        );
    }

    #[test]
    fn test_card_split_by_whitespace() {
        assert_eq!(
            Err(ParseError::InvalidToken("5".to_string())),
            FiveCardHand::new_from_str("5 H5C 6S7S KD")
        );
        assert_eq!(
            Err(ParseError::InvalidToken("K".to_string())),
            FiveCardHand::new_from_str("5H 5C 6S 7S K\tD")
        );
    }

    #[test]
    fn test_mixed_packing() {
        let mixed = FiveCardHand::new_from_str("5H5C 6S7S  KD").unwrap();
        assert_eq!(FiveCardHand::new_from_str("5H 5C 6S 7S KD").unwrap(), mixed);
    }

    #[test]
    fn test_duplicates_are_accepted() {
        let hand = FiveCardHand::new_from_str("AS AS AS AS AS").unwrap();
        assert_eq!(5, hand.value_count(Value::Ace));
    }

    #[test]
    fn test_display() {
        let hand: FiveCardHand = "5h 5c 6s 7s kd".to_uppercase().parse().unwrap();
        assert_eq!("5H 5C 6S 7S KD", hand.to_string());
    }
}
