use thiserror::Error;

/// Errors that can come from turning text into cards and hands.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ParseError {
    #[error("Unexpected value char {0:?}, expected one of 23456789TJQKA")]
    UnexpectedValueChar(char),
    #[error("Unexpected suit char {0:?}, expected one of SHDC")]
    UnexpectedSuitChar(char),
    #[error("Card token {0:?} must be exactly two characters")]
    InvalidToken(String),
    #[error("Expected {expected} cards but found {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("Input is not valid UTF-8")]
    InvalidUtf8,
}
