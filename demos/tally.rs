//! Tally a file of heads up deals.
//!
//! ```text
//! cargo run --example tally -- poker.txt [config.json]
//! ```
//!
//! Set `RUST_LOG=poker_showdown=trace` to see every line as it is judged.
use std::process::ExitCode;

use poker_showdown::showdown::ShowdownBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(hands_path) = args.next() else {
        eprintln!("usage: tally <hands file> [config json]");
        return ExitCode::FAILURE;
    };

    let builder = match args.next() {
        Some(config_path) => ShowdownBuilder::new().load_config(config_path),
        None => Ok(ShowdownBuilder::new()),
    };

    let result = builder
        .and_then(|b| b.build())
        .and_then(|showdown| showdown.run_path(&hands_path));

    match result {
        Ok(tally) => {
            match serde_json::to_string_pretty(&tally) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("failed to serialize tally: {e}"),
            }
            println!("Player 1: {}", tally.first);
            println!("Player 1 win %: {:.2}%", tally.first_win_percentage());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
