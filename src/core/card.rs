use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// Card rank. Called value here so that rank can be reserved for the
/// strength of a whole hand.
///
/// The discriminant is the ordinal used for arithmetic, `Two` is 0 and
/// `Ace` is 12. Aces are always high.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, lowest first.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Every value from `Two` up to `Ace`.
    ///
    /// ```
    /// use poker_showdown::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(Value::Two, values[0]);
    /// assert_eq!(Value::Ace, values[12]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Look a value up by its ordinal.
    pub fn from_u8(v: u8) -> Option<Self> {
        VALUES.get(v as usize).copied()
    }

    /// The ordinal of this value in `[0, 12]`.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Given a character parse that char into a value.
    /// Only upper case face symbols are accepted.
    ///
    /// ```
    /// use poker_showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Convert this value into the char used in card tokens.
    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

/// Card suit. Suits have no strength, they are only ever compared for
/// equality when looking for flushes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// All four suits.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Index used for per suit counting.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Parse a suit symbol. Both cases are accepted.
    ///
    /// ```
    /// use poker_showdown::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('h'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'S' | 's' => Some(Self::Spade),
            'C' | 'c' => Some(Self::Club),
            'H' | 'h' => Some(Self::Heart),
            'D' | 'd' => Some(Self::Diamond),
            _ => None,
        }
    }

    /// The upper case symbol for this suit.
    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Heart => 'H',
            Self::Diamond => 'D',
        }
    }
}

/// A single playing card.
///
/// Two cards are equal only when both value and suit match. Anything that
/// decides the strength of a hand only looks at the value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Ordinal of the card's value, usable for arithmetic such as
    /// checking that two cards are consecutive.
    pub const fn rank_value(&self) -> u8 {
        self.value.ordinal()
    }

    /// Every card of a standard 52 card deck, grouped by value.
    pub fn deck() -> impl Iterator<Item = Card> {
        VALUES
            .into_iter()
            .flat_map(|value| SUITS.into_iter().map(move |suit| Card::new(value, suit)))
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parse a two character token such as `"5H"` or `"TC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(v), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::InvalidToken(s.to_string()));
        };
        let value = Value::from_char(v).ok_or(ParseError::UnexpectedValueChar(v))?;
        let suit = Suit::from_char(su).ok_or(ParseError::UnexpectedSuitChar(su))?;
        Ok(Card::new(value, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}
