//! Crate-level errors

use crate::vm::RuntimeError;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("Error: Can't open file {path}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Helper for testing to get at the interpreter diagnostic, if this error
    /// came from a handler or the dispatcher.
    pub fn runtime(&self) -> Option<&RuntimeError> {
        match self {
            Error::Runtime(err) => Some(err),
            _ => None,
        }
    }
}
