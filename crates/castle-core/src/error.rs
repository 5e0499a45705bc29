//! Menu errors

use thiserror::Error;

/// Why a line of input was not accepted as a menu choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("no menu option {0}")]
    OutOfRange(i64),
}

/// Errors that stop the menu loop
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
