//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the cabinet crate.
///
/// None of these are fatal: the animation core degrades to "retain last good
/// state" and surfaces the error only so callers can log it.
#[derive(Debug)]
pub enum CabinetError {
    /// A view goal with non-finite coordinates was rejected.
    InvalidGoal {
        /// Requested orbit target.
        target: Vec3,
        /// Requested camera position.
        position: Vec3,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CabinetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGoal { target, position } => write!(
                f,
                "invalid view goal: target {target}, position {position}"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CabinetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CabinetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
