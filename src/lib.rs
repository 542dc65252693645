//! This is a library to classify and compare five card poker hands.
//!
//! # Core
//!
//! The core module contains the card model, the five card hand, the
//! classifier that turns a hand into a category plus tie break key, and the
//! comparator that picks a winner between two scores.
//!
//! Classification is a pure function of the five cards. There is no shared
//! state, so hands can be scored from as many threads as you like.
//!
//! ```
//! use poker_showdown::core::{compare_hands, Category, FiveCardHand, Winner};
//!
//! let royal = FiveCardHand::new_from_str("TH JH QH KH AH").unwrap();
//! let straight_flush = FiveCardHand::new_from_str("2C 3C 4C 5C 6C").unwrap();
//!
//! assert_eq!(Category::RoyalFlush, royal.score().category());
//! assert_eq!(Winner::FirstHand, compare_hands(&royal, &straight_flush));
//! ```
//!
//! Aces are always high. `A 2 3 4 5` is not a straight.
//!
//! # Showdown
//!
//! With the `showdown` feature (on by default) the showdown module reads a
//! file of heads up deals, one per line, and tallies how many each side won.
//! Turn on `parallel` to score lines on the rayon thread pool.

/// Cards, hands, classification, and comparison.
pub mod core;

/// Tallying heads up showdowns read from text.
#[cfg(feature = "showdown")]
pub mod showdown;
