use super::lexer;
use super::parser;
use super::type_checker;
use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use thiserror::Error;

/// Any failure of the front end. The first error stops the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lexical(#[from] lexer::Error),
    #[error("syntax error: {0}")]
    Syntax(parser::SyntaxError),
    #[error("type error: {0}")]
    Type(#[from] type_checker::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Type,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexical(_) => ErrorKind::Lexical,
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Type(_) => ErrorKind::Type,
        }
    }

    /// The message without the location.
    pub fn message(&self) -> String {
        match self {
            Error::Lexical(e) => e.message(),
            Error::Syntax(e) => e.message(),
            Error::Type(e) => e.message.clone(),
        }
    }

    pub fn location(&self) -> SourceLocation {
        *self.source_location()
    }
}

impl From<parser::Error> for Error {
    fn from(e: parser::Error) -> Self {
        match e {
            parser::Error::Lexical(e) => Error::Lexical(e),
            parser::Error::Syntax(e) => Error::Syntax(e),
        }
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> &SourceLocation {
        match self {
            Error::Lexical(e) => e.source_location(),
            Error::Syntax(e) => e.source_location(),
            Error::Type(e) => e.source_location(),
        }
    }
}
