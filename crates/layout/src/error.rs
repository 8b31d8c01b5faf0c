use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = StdResult<T, Error>;

/// Layout error type. Every variant aborts the operation that raised it;
/// nothing inside the engine retries.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("invalid: {0}")]
    /// A precondition or tree invariant was violated by the caller.
    Invalid(String),
    #[error("alloc: {0}")]
    /// A node could not be allocated.
    Alloc(String),
    #[error("render: {0}")]
    /// The paint backend failed.
    Render(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Render(e.to_string())
    }
}
