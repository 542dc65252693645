use serde::{Deserialize, Serialize};

use super::error::{Result, ShowdownError};

/// What to do with a line that does not hold two valid hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidLinePolicy {
    /// Stop and return the first bad line as an error.
    #[default]
    Abort,
    /// Log the bad line, count it as skipped, and keep going.
    Skip,
}

/// Configuration for running a showdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowdownConfig {
    /// Score lines on the rayon thread pool. Needs the `parallel` feature,
    /// without it lines are always scored on the calling thread.
    pub parallel: bool,
    /// Handling for lines that fail to parse
    pub on_invalid_line: InvalidLinePolicy,
    /// Stop after this many non blank lines
    pub max_lines: Option<usize>,
}

impl ShowdownConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use poker_showdown::showdown::{InvalidLinePolicy, ShowdownConfig};
    ///
    /// let config = ShowdownConfig::from_json(r#"{"on_invalid_line": "skip"}"#).unwrap();
    /// assert_eq!(InvalidLinePolicy::Skip, config.on_invalid_line);
    /// assert!(!config.parallel);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the showdown configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_lines == Some(0) {
            return Err(ShowdownError::InvalidConfig(
                "max_lines must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ShowdownConfig::new().validate().is_ok());
        assert_eq!(InvalidLinePolicy::Abort, ShowdownConfig::new().on_invalid_line);
    }

    #[test]
    fn test_zero_max_lines() {
        let config = ShowdownConfig {
            max_lines: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ShowdownError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let config =
            ShowdownConfig::from_json(r#"{"parallel": true, "max_lines": 100}"#).unwrap();
        assert!(config.parallel);
        assert_eq!(Some(100), config.max_lines);
        assert_eq!(InvalidLinePolicy::Abort, config.on_invalid_line);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            ShowdownConfig::from_json(r#"{"max_lines": 0}"#),
            Err(ShowdownError::InvalidConfig(_))
        ));
        assert!(matches!(
            ShowdownConfig::from_json(r#"{"on_invalid_line": "retry"}"#),
            Err(ShowdownError::Json(_))
        ));
    }
}
