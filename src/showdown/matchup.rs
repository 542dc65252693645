use crate::core::{FiveCardHand, HAND_SIZE, HandScore, ParseError, Winner, compare};

/// Two hands dealt against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub first: FiveCardHand,
    pub second: FiveCardHand,
}

impl Matchup {
    pub fn new(first: FiveCardHand, second: FiveCardHand) -> Self {
        Self { first, second }
    }

    /// Parse one line of ten card tokens. The first five belong to the
    /// first hand and the last five to the second.
    ///
    /// ```
    /// use poker_showdown::core::Winner;
    /// use poker_showdown::showdown::Matchup;
    ///
    /// let m = Matchup::parse_line("5H 5C 6S 7S KD 2C 3S 8S 8D TD").unwrap();
    /// assert_eq!(Winner::SecondHand, m.winner());
    /// ```
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 * HAND_SIZE {
            return Err(ParseError::WrongCardCount {
                expected: 2 * HAND_SIZE,
                found: tokens.len(),
            });
        }
        let (first, second) = tokens.split_at(HAND_SIZE);
        Ok(Self::new(
            FiveCardHand::from_tokens(first.iter().copied())?,
            FiveCardHand::from_tokens(second.iter().copied())?,
        ))
    }

    /// Scores for the first and second hand.
    pub fn scores(&self) -> (HandScore, HandScore) {
        (self.first.score(), self.second.score())
    }

    pub fn winner(&self) -> Winner {
        let (first, second) = self.scores();
        compare(&first, &second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_parse_line() {
        let m = Matchup::parse_line("TH JH QH KH AH 2C 3C 4C 5C 6C").unwrap();
        let (first, second) = m.scores();
        assert_eq!(Category::RoyalFlush, first.category());
        assert_eq!(Category::StraightFlush, second.category());
        assert_eq!(Winner::FirstHand, m.winner());
    }

    #[test]
    fn test_parse_line_extra_whitespace() {
        let m = Matchup::parse_line("  2H 3H 4H 5H 7H\t2C 3D 4S 5H 6C \r").unwrap();
        assert_eq!(Winner::FirstHand, m.winner());
    }

    #[test]
    fn test_parse_line_wrong_count() {
        assert_eq!(
            Err(ParseError::WrongCardCount {
                expected: 10,
                found: 9
            }),
            Matchup::parse_line("TH JH QH KH AH 2C 3C 4C 5C")
        );
    }

    #[test]
    fn test_parse_line_bad_card() {
        assert_eq!(
            Err(ParseError::UnexpectedValueChar('1')),
            Matchup::parse_line("TH JH QH KH AH 2C 3C 4C 5C 1C")
        );
    }
}
