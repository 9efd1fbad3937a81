use std::{
    fmt::{self, Display},
    result,
};

use thiserror::Error;

pub type Result<T> = result::Result<T, LexicalError>;

/// The compilation phase a diagnostic came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum Phase {
    Lexical,
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lexical => write!(f, "LexicalPhase"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
#[error("[{phase}]: ErrorMessage: {message} at line {line}, column {column}")]
pub struct LexicalError {
    phase: Phase,
    message: String,
    line: usize,
    column: usize,
}

impl LexicalError {
    pub fn new<S: Into<String>>(line: usize, column: usize, message: S) -> LexicalError {
        LexicalError { phase: Phase::Lexical, message: message.into(), line, column }
    }

    pub fn unexpected_character(line: usize, column: usize, c: char) -> LexicalError {
        LexicalError::new(line, column, format!("Unexpected character: {}", c))
    }

    pub fn unterminated_string(line: usize, column: usize) -> LexicalError {
        LexicalError::new(line, column, "Unterminated String.")
    }

    pub fn invalid_number(line: usize, column: usize) -> LexicalError {
        LexicalError::new(line, column, "Invalid Number")
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_phase_message_and_position() {
        let e = LexicalError::unexpected_character(3, 7, '@');
        assert_eq!(
            "[LexicalPhase]: ErrorMessage: Unexpected character: @ at line 3, column 7",
            e.to_string()
        );
    }

    #[test]
    fn every_error_is_lexical() {
        assert_eq!(Phase::Lexical, LexicalError::unterminated_string(1, 1).phase());
        assert_eq!(Phase::Lexical, LexicalError::invalid_number(1, 1).phase());
    }
}
