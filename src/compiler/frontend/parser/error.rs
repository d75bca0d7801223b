use crate::compiler::frontend::lexer::{self, Token, TokenKind};
use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] lexer::Error),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// The current token is not in the predict set of the production being parsed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("expected {expected}, found {found} {text:?} at {location}")]
pub struct SyntaxError {
    pub expected: String,
    pub found: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl SyntaxError {
    pub fn message(&self) -> String {
        format!(
            "expected {}, found {} {:?}",
            self.expected, self.found, self.text
        )
    }
}

impl HasSourceLocation for SyntaxError {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}

impl Error {
    pub fn unexpected(token: &Token, expected: &str) -> Self {
        Error::Syntax(SyntaxError {
            expected: expected.to_string(),
            found: token.kind,
            text: token.text.clone(),
            location: token.location,
        })
    }

    pub fn unexpected_token<T>(token: &Token, expected: &str) -> Result<T, Error> {
        Err(Self::unexpected(token, expected))
    }

    pub fn message(&self) -> String {
        match self {
            Error::Lexical(e) => e.message(),
            Error::Syntax(e) => e.message(),
        }
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> &SourceLocation {
        match self {
            Error::Lexical(e) => e.source_location(),
            Error::Syntax(e) => e.source_location(),
        }
    }
}
