//! Error types for the crate's fallible boundaries.
//!
//! Part lookups never fail (unknown ids resolve to the category default), so
//! the only errors are battle setup, saving a creature, and I/O at the edges.

use std::path::PathBuf;

use thiserror::Error;

use crate::battle::Slot;

/// A battle could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleSetupError {
    #[error("no fighter selected for slot {0}")]
    MissingFighter(Slot),

    #[error("a creature cannot fight itself")]
    SameFighter,
}

/// A creature could not be saved to the roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("creature name must not be empty")]
    EmptyName,
}

/// Errors at the I/O edges: files, images, config and command-line input
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognised colour notation
    #[error("invalid colour '{0}'")]
    Color(String),

    /// Malformed `key=value` creature description
    #[error("invalid creature spec '{input}': {reason}")]
    Spec { input: String, reason: String },

    /// Gallery layout whose pixel size overflows or exceeds `MAX_SHEET_EDGE`
    #[error("gallery sheet of {count} creatures at {tile}px tiles is too large")]
    SheetTooLarge { count: usize, tile: u32 },

    #[error(transparent)]
    Setup(#[from] BattleSetupError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

impl ForgeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn spec(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Spec {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = ForgeError> = std::result::Result<T, E>;
