use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {location}")]
pub struct Error {
    pub kind: ErrorKind,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    IllegalCharacter(char),
    UnterminatedString,
    InvalidEscape(char),
    LeadingZero,
    MissingFractionDigits,
    IntegerOverflow(String),
}

impl Error {
    pub fn new(kind: ErrorKind, location: SourceLocation) -> Self {
        Error { kind, location }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorKind::*;

        match self {
            IllegalCharacter(c) => write!(f, "illegal character {:?}", c),
            UnterminatedString => f.write_str("unterminated string literal"),
            InvalidEscape(c) => write!(f, "invalid escape sequence \\{}", c),
            LeadingZero => f.write_str("numeric literal with leading zero"),
            MissingFractionDigits => f.write_str("expected digit after '.'"),
            IntegerOverflow(text) => write!(f, "integer literal {} does not fit into 32 bits", text),
        }
    }
}
