use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, event, instrument, trace, warn};

use crate::core::{ParseError, Winner, compare};

use super::config::{InvalidLinePolicy, ShowdownConfig};
use super::error::{Result, ShowdownError};
use super::matchup::Matchup;
use super::tally::Tally;

/// A numbered line of input. Numbers start at 1. Lines that are not valid
/// UTF-8 carry their error so they can go through the invalid line policy.
type NumberedLine = (usize, std::result::Result<String, ParseError>);

/// Scores every line of a hands file and tallies who won.
///
/// Each line is independent of every other line, so lines can be scored
/// in any order. Results are always folded back in input order so that the
/// tally, and which error gets reported, never depends on scheduling.
///
/// Serial runs fold one line at a time as it is read. Parallel runs read
/// every line first.
#[derive(Debug, Clone)]
pub struct Showdown {
    config: ShowdownConfig,
}

impl Showdown {
    /// Create a new Showdown (internal - use ShowdownBuilder instead)
    pub(crate) fn new(config: ShowdownConfig) -> Self {
        Self { config }
    }

    /// Get the showdown configuration
    pub fn config(&self) -> &ShowdownConfig {
        &self.config
    }

    /// Score every line from a reader.
    ///
    /// I/O errors always abort. A line that is not valid UTF-8 is treated
    /// like any other bad line.
    ///
    /// ```
    /// use poker_showdown::showdown::ShowdownBuilder;
    ///
    /// let input = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n\
    ///              TH JH QH KH AH 2C 3C 4C 5C 6C\n";
    /// let tally = ShowdownBuilder::new().build().unwrap().run(input.as_bytes()).unwrap();
    /// assert_eq!(1, tally.first);
    /// assert_eq!(1, tally.second);
    /// ```
    #[instrument(level = "debug", skip(self, reader))]
    pub fn run<R: BufRead>(&self, reader: R) -> Result<Tally> {
        self.judge_stream(NumberedLines::new(reader))
    }

    /// Score every line of the file at `path`.
    pub fn run_path<P: AsRef<Path>>(&self, path: P) -> Result<Tally> {
        let path = path.as_ref();
        debug!(?path, "Reading hands file");
        let file = File::open(path)?;
        self.run(BufReader::new(file))
    }

    /// Score lines that are already in memory.
    pub fn run_lines<I, S>(&self, lines: I) -> Result<Tally>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbered = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_ref().to_string()))
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| -> io::Result<NumberedLine> { Ok((number, Ok(line))) });
        self.judge_stream(numbered)
    }

    /// Whether lines will actually be scored on the rayon pool.
    #[cfg(feature = "parallel")]
    pub(crate) fn scores_in_parallel(&self) -> bool {
        self.config.parallel
    }

    #[cfg(not(feature = "parallel"))]
    pub(crate) fn scores_in_parallel(&self) -> bool {
        if self.config.parallel {
            warn!("Parallel scoring requested without the parallel feature, scoring serially");
        }
        false
    }

    fn judge_stream<I>(&self, lines: I) -> Result<Tally>
    where
        I: Iterator<Item = io::Result<NumberedLine>>,
    {
        let parallel = self.scores_in_parallel();
        event!(tracing::Level::DEBUG, parallel, "Starting showdown");

        let lines = lines.take(self.config.max_lines.unwrap_or(usize::MAX));
        let mut tally = Tally::new();
        if parallel {
            self.judge_parallel(lines, &mut tally)?;
        } else {
            self.judge_serial(lines, &mut tally)?;
        }

        event!(
            tracing::Level::INFO,
            first = tally.first,
            second = tally.second,
            ties = tally.ties,
            skipped = tally.skipped,
            "Showdown complete"
        );
        Ok(tally)
    }

    #[cfg(feature = "parallel")]
    fn judge_parallel<I>(&self, lines: I, tally: &mut Tally) -> Result<()>
    where
        I: Iterator<Item = io::Result<NumberedLine>>,
    {
        let lines = lines.collect::<io::Result<Vec<_>>>()?;
        let outcomes: Vec<Result<Winner>> = lines
            .into_par_iter()
            .map(|(number, line)| judge_line(number, line))
            .collect();
        outcomes
            .into_iter()
            .try_for_each(|outcome| self.record(tally, outcome))
    }

    #[cfg(not(feature = "parallel"))]
    fn judge_parallel<I>(&self, lines: I, tally: &mut Tally) -> Result<()>
    where
        I: Iterator<Item = io::Result<NumberedLine>>,
    {
        self.judge_serial(lines, tally)
    }

    /// Read, score, and fold one line at a time. An abort stops reading.
    fn judge_serial<I>(&self, lines: I, tally: &mut Tally) -> Result<()>
    where
        I: Iterator<Item = io::Result<NumberedLine>>,
    {
        for line in lines {
            let (number, line) = line?;
            self.record(tally, judge_line(number, line))?;
        }
        Ok(())
    }

    /// Fold one outcome into the tally, applying the invalid line policy.
    fn record(&self, tally: &mut Tally, outcome: Result<Winner>) -> Result<()> {
        match outcome {
            Ok(winner) => tally.record(winner),
            Err(e) => match self.config.on_invalid_line {
                InvalidLinePolicy::Abort => return Err(e),
                InvalidLinePolicy::Skip => {
                    warn!(error = %e, "Skipping invalid line");
                    tally.record_skipped();
                }
            },
        }
        Ok(())
    }
}

/// Non blank lines of a reader, numbered, read as raw bytes so that a bad
/// encoding only spoils its own line.
struct NumberedLines<R> {
    reader: R,
    number: usize,
}

impl<R> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self { reader, number: 0 }
    }
}

impl<R: BufRead> Iterator for NumberedLines<R> {
    type Item = io::Result<NumberedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = Vec::new();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.number += 1;
            let line = String::from_utf8(buf).map_err(|_| ParseError::InvalidUtf8);
            if line.as_ref().is_ok_and(|l| l.trim().is_empty()) {
                continue;
            }
            return Some(Ok((self.number, line)));
        }
    }
}

fn judge_line(number: usize, line: std::result::Result<String, ParseError>) -> Result<Winner> {
    let matchup = line
        .and_then(|line| Matchup::parse_line(&line))
        .map_err(|source| ShowdownError::Parse { line: number, source })?;
    let (first, second) = matchup.scores();
    let winner = compare(&first, &second);
    trace!(
        line = number,
        first_hand = %matchup.first,
        second_hand = %matchup.second,
        first_score = %first,
        second_score = %second,
        %winner,
        "Judged line"
    );
    Ok(winner)
}
