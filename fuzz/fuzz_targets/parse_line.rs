#![no_main]

extern crate libfuzzer_sys;
extern crate poker_showdown;

use libfuzzer_sys::fuzz_target;
use poker_showdown::showdown::Matchup;

fuzz_target!(|line: &str| {
    if let Ok(matchup) = Matchup::parse_line(line) {
        // Anything that parses must print back to the same hands.
        let printed = format!("{} {}", matchup.first, matchup.second);
        assert_eq!(Ok(matchup), Matchup::parse_line(&printed));
    }
});
