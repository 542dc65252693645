#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_showdown;

use libfuzzer_sys::fuzz_target;
use poker_showdown::core::{Card, FiveCardHand, Winner, compare};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub first: [Card; 5],
    pub second: [Card; 5],
}

fuzz_target!(|input: Input| {
    let first = FiveCardHand::new(input.first);
    let second = FiveCardHand::new(input.second);
    let (a, b) = (first.score(), second.score());

    assert_eq!(a, first.score());
    assert_eq!(a.category().tie_break_len(), a.tie_break().len());
    assert_eq!(compare(&a, &b), compare(&b, &a).swap());
    assert_eq!(Winner::Tie, compare(&a, &a));
    if a.category() > b.category() {
        assert_eq!(Winner::FirstHand, compare(&a, &b));
    }
});
