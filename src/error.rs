//! Crate-level error types.
//!
//! The layout and analysis core never fails; these cover the edges where
//! files are read, text is parsed, or threads are spawned.

use std::fmt;

/// Errors produced by the ligview crate.
#[derive(Debug)]
pub enum LigviewError {
    /// Malformed molecule input (JSON).
    MoleculeParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for LigviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoleculeParse(msg) => {
                write!(f, "molecule parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LigviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LigviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LigviewError {
    fn from(e: serde_json::Error) -> Self {
        Self::MoleculeParse(e.to_string())
    }
}
