//! Heads up showdowns over a whole file of hands.
//!
//! Every non blank line holds ten card tokens. The first five are the first
//! player's hand and the last five the second player's. Each line is scored
//! on its own and the outcomes are tallied.
//!
//! # Example
//!
//! ```no_run
//! use poker_showdown::showdown::{InvalidLinePolicy, ShowdownBuilder};
//!
//! let showdown = ShowdownBuilder::new()
//!     .on_invalid_line(InvalidLinePolicy::Skip)
//!     .parallel(true)
//!     .build()?;
//!
//! let tally = showdown.run_path("poker.txt")?;
//! println!("Player 1: {}", tally.first);
//! # Ok::<(), poker_showdown::showdown::ShowdownError>(())
//! ```

mod builder;
mod config;
mod error;
mod matchup;
mod runner;
mod tally;

pub use builder::ShowdownBuilder;
pub use config::{InvalidLinePolicy, ShowdownConfig};
pub use error::{Result, ShowdownError};
pub use matchup::Matchup;
pub use runner::Showdown;
pub use tally::Tally;
