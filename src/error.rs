//! Crate-level error types.

use std::fmt;

use crate::camera::CameraModeId;

/// Errors produced by the deskview crate.
///
/// Camera errors are local invariant violations (a caller asked for a mode
/// that was never registered, or drove the rig before initializing it).
/// They are reported instead of silently leaving the rig in a half-updated
/// state.
#[derive(Debug)]
pub enum ViewerError {
    /// The requested camera mode is not registered with the rig.
    UnknownMode(CameraModeId),
    /// The rig was ticked, updated or read before `initialize`.
    NoActiveCamera,
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode(id) => write!(f, "unknown camera mode '{id}'"),
            Self::NoActiveCamera => {
                write!(f, "camera rig used before initialization")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
