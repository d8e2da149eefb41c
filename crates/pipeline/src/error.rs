//! Errors raised by filter stages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// A recognised query parameter carried a value the stage cannot use.
    ///
    /// The display string is returned to the client verbatim.
    #[error("{param} must be {expected}")]
    InvalidArgument {
        param: &'static str,
        expected: &'static str,
        value: String,
    },

    /// Anything unanticipated. Surfaced as a 500 by the server.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
