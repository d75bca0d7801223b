pub mod reporting;
use crate::compiler::frontend;
use crate::compiler::source::SourceId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("{1}")]
    FrontendError(SourceId, frontend::Error),
}

impl Error {
    pub fn frontend(source: SourceId, e: frontend::Error) -> Self {
        Error::FrontendError(source, e)
    }
}
