//! Crate-wide error type.

use thiserror::Error as ThisError;

/// Errors raised by the construction, optimization, and reporting layers.
///
/// An exhausted time budget is not an error: the optimizer reports it through
/// [`crate::local_search::Termination::BudgetExhausted`].
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("time budget must be positive, got {0:?}")]
    InvalidBudget(std::time::Duration),

    #[error("no optimal cost registered for instance `{0}`")]
    UnknownInstance(String),

    #[error("node {0} is not part of the instance")]
    UnknownNode(usize),

    #[error("node {0} appears more than once")]
    DuplicateNode(usize),

    #[error("node {id} has a non-finite coordinate")]
    InvalidCoordinate { id: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
