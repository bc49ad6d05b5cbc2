use std::result;

use thiserror::Error;

/// A type alias for the terminal setup and teardown in [`crate`].
pub type Result<T> = result::Result<T, NetgraphError>;

/// An error from driving the terminal, i.e. raw mode, the alternate screen or
/// the cursor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetgraphError {
    #[error("Terminal error, {0}")]
    Terminal(String),
}

impl From<std::io::Error> for NetgraphError {
    fn from(err: std::io::Error) -> Self {
        NetgraphError::Terminal(err.to_string())
    }
}
