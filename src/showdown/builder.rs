use std::path::Path;

use super::config::{InvalidLinePolicy, ShowdownConfig};
use super::error::Result;
use super::runner::Showdown;

/// Builder for constructing Showdown instances
///
/// # Example
///
/// ```
/// use poker_showdown::showdown::{InvalidLinePolicy, ShowdownBuilder};
///
/// let showdown = ShowdownBuilder::new()
///     .on_invalid_line(InvalidLinePolicy::Skip)
///     .max_lines(1000)
///     .build()
///     .unwrap();
/// assert_eq!(Some(1000), showdown.config().max_lines);
/// ```
#[derive(Debug, Default)]
pub struct ShowdownBuilder {
    base: Option<ShowdownConfig>,
    parallel: Option<bool>,
    on_invalid_line: Option<InvalidLinePolicy>,
    max_lines: Option<usize>,
}

impl ShowdownBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration. Anything set directly on the
    /// builder still wins.
    pub fn config(mut self, config: ShowdownConfig) -> Self {
        self.base = Some(config);
        self
    }

    /// Load the starting configuration from a JSON file
    pub fn load_config<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(self.config(ShowdownConfig::from_json(&json)?))
    }

    /// Score lines in parallel when the `parallel` feature is enabled
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set what happens to lines that fail to parse
    pub fn on_invalid_line(mut self, policy: InvalidLinePolicy) -> Self {
        self.on_invalid_line = Some(policy);
        self
    }

    /// Stop after this many non blank lines
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Build the Showdown
    pub fn build(self) -> Result<Showdown> {
        let mut config = self.base.unwrap_or_default();
        if let Some(parallel) = self.parallel {
            config.parallel = parallel;
        }
        if let Some(policy) = self.on_invalid_line {
            config.on_invalid_line = policy;
        }
        if self.max_lines.is_some() {
            config.max_lines = self.max_lines;
        }
        config.validate()?;
        Ok(Showdown::new(config))
    }
}
