//! Error types for the fallible edges of the game.
//!
//! The simulation itself never fails. Errors only come from reading settings
//! and from the asset preloader being handed a key it does not know about.

use std::fmt;

/// Top-level error enum.
#[derive(Debug)]
pub enum Error {
    /// Settings file could not be read or written.
    Io(std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`].
    Parse(serde_json::Error),

    /// The loader reported a key that is not in the asset manifest.
    UnknownAsset {
        /// The key the loader reported.
        key: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "settings I/O failed: {e}"),
            Error::Parse(e) => write!(f, "settings are not valid JSON: {e}"),
            Error::UnknownAsset { key } => write!(f, "unknown asset key: {key:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::UnknownAsset { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
