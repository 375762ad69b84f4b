//!
//! Error types used by the wallet facade.
//!

use cobra_bip32::Error as Bip32Error;
use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by the wallet facade.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Bip32 -> {0}")]
    Bip32(#[from] Bip32Error),

    #[error("Serde -> {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::Custom(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::Custom(err.to_string())
    }
}
