use crate::compiler::source_location::{HasSourceLocation, SourceLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} at {location}")]
pub struct Error {
    pub message: String,
    pub location: SourceLocation,
}

impl Error {
    pub fn new<M: Into<String>>(message: M, location: SourceLocation) -> Self {
        Error {
            message: message.into(),
            location,
        }
    }

    pub fn type_error<T, M: Into<String>>(message: M, location: SourceLocation) -> Result<T, Error> {
        Err(Self::new(message, location))
    }

    pub fn undefined(name: &str, location: SourceLocation) -> Self {
        Self::new(format!("undefined identifier {}", name), location)
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> &SourceLocation {
        &self.location
    }
}
