use serde::{Deserialize, Serialize};

use crate::core::Winner;

/// Running count of showdown outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Lines won by the first hand
    pub first: u64,
    /// Lines won by the second hand
    pub second: u64,
    /// Lines where neither hand was stronger
    pub ties: u64,
    /// Lines that could not be parsed and were skipped
    pub skipped: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::FirstHand => self.first += 1,
            Winner::SecondHand => self.second += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &Tally) {
        self.first += other.first;
        self.second += other.second;
        self.ties += other.ties;
        self.skipped += other.skipped;
    }

    /// Number of lines that produced a result. Skipped lines are not
    /// counted.
    pub fn total(&self) -> u64 {
        self.first + self.second + self.ties
    }

    /// Calculate first hand win percentage (0.0 - 100.0)
    pub fn first_win_percentage(&self) -> f32 {
        percentage(self.first, self.total())
    }

    /// Calculate second hand win percentage (0.0 - 100.0)
    pub fn second_win_percentage(&self) -> f32 {
        percentage(self.second, self.total())
    }
}

fn percentage(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (part as f32 / total as f32) * 100.0
}

impl FromIterator<Winner> for Tally {
    fn from_iter<I: IntoIterator<Item = Winner>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for winner in iter {
            tally.record(winner);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let tally: Tally = [
            Winner::FirstHand,
            Winner::SecondHand,
            Winner::SecondHand,
            Winner::Tie,
        ]
        .into_iter()
        .collect();
        assert_eq!(1, tally.first);
        assert_eq!(2, tally.second);
        assert_eq!(1, tally.ties);
        assert_eq!(4, tally.total());
        assert_eq!(25.0, tally.first_win_percentage());
        assert_eq!(50.0, tally.second_win_percentage());
    }

    #[test]
    fn test_empty_percentages() {
        let tally = Tally::new();
        assert_eq!(0.0, tally.first_win_percentage());
        assert_eq!(0.0, tally.second_win_percentage());
    }

    #[test]
    fn test_merge() {
        let mut a = Tally {
            first: 3,
            second: 1,
            ties: 0,
            skipped: 2,
        };
        let b = Tally {
            first: 1,
            second: 4,
            ties: 1,
            skipped: 0,
        };
        a.merge(&b);
        assert_eq!(
            Tally {
                first: 4,
                second: 5,
                ties: 1,
                skipped: 2
            },
            a
        );
        // Skipped lines never count towards the total.
        assert_eq!(10, a.total());
    }

    #[test]
    fn test_json() {
        let tally = Tally {
            first: 376,
            second: 624,
            ties: 0,
            skipped: 0,
        };
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(r#"{"first":376,"second":624,"ties":0,"skipped":0}"#, json);
    }
}
