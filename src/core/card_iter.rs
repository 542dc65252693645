use super::card::Card;
use super::hand::{FiveCardHand, HAND_SIZE};

/// Given some cards create every possible five card hand from them.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Set of current offsets being used to create hands.
    idx: [usize; HAND_SIZE],
}

/// `CardIter` is a container for cards and current state.
impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    ///
    /// ```
    /// use poker_showdown::core::{Card, CardIter};
    ///
    /// let deck: Vec<Card> = Card::deck().take(7).collect();
    /// assert_eq!(21, CardIter::new(&deck).count());
    /// ```
    pub fn new(possible_cards: &[Card]) -> CardIter<'_> {
        let mut idx = [0, 1, 2, 3, 4];
        // Step the last offset back so the first call to next lands on
        // the first hand.
        idx[HAND_SIZE - 1] -= 1;
        CardIter {
            possible_cards,
            idx,
        }
    }
}

/// The actual `Iterator` for `FiveCardHand`'s.
impl Iterator for CardIter<'_> {
    type Item = FiveCardHand;
    fn next(&mut self) -> Option<FiveCardHand> {
        // Keep track of where we are mutating
        let mut current_level: usize = HAND_SIZE - 1;

        while current_level < HAND_SIZE {
            // Move the current level forward one.
            self.idx[current_level] += 1;

            // Now check if moving this level forward means that
            // we will need more cards to fill out the rest of the hand
            // than are there.
            let cards_needed_after = HAND_SIZE - (current_level + 1);
            if self.idx[current_level] + cards_needed_after >= self.possible_cards.len() {
                if current_level == 0 {
                    return None;
                }
                current_level -= 1;
            } else {
                if current_level < HAND_SIZE - 1 {
                    self.idx[current_level + 1] = self.idx[current_level];
                }
                // Move forward one level
                current_level += 1;
            }
        }

        Some(FiveCardHand::new(self.idx.map(|i| self.possible_cards[i])))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_iter_exactly_five() {
        let cards: Vec<Card> = Card::deck().take(5).collect();
        let hands: Vec<FiveCardHand> = CardIter::new(&cards).collect();
        assert_eq!(1, hands.len());
        assert_eq!(&cards[..], &hands[0].cards()[..]);
    }

    #[test]
    fn test_iter_too_few() {
        let cards: Vec<Card> = Card::deck().take(4).collect();
        assert_eq!(0, CardIter::new(&cards).count());
        assert_eq!(0, CardIter::new(&[]).count());
    }

    #[test]
    fn test_iter_unique() {
        let cards: Vec<Card> = Card::deck().take(9).collect();
        let mut seen = HashSet::new();
        for hand in CardIter::new(&cards) {
            let mut key: Vec<Card> = hand.cards().to_vec();
            key.sort_by_key(|c| (c.value, c.suit as u8));
            assert!(seen.insert(key));
        }
        // 9 choose 5
        assert_eq!(126, seen.len());
    }
}
