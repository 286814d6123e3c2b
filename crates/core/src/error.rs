use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by the fallible helpers in utilkit.
///
/// Every other helper is total and returns a fallback value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid Phone Number: {0}")]
    InvalidPhoneNumber(String),
}

pub type Result<T> = StdResult<T, UtilError>;
