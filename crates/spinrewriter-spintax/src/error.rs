//! Error types for spintax parsing

use crate::SpintaxFormat;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpintaxError {
    #[error("Empty spintax input")]
    Empty,

    #[error("Missing opening delimiter {open:?} for format {format}")]
    MissingOpen {
        format: SpintaxFormat,
        open: &'static str,
    },

    #[error("Missing closing delimiter {close:?} for format {format}")]
    MissingClose {
        format: SpintaxFormat,
        close: &'static str,
    },

    #[error("Spintax block has no options for format {format}")]
    EmptyBlock { format: SpintaxFormat },

    #[error("Unknown spintax format: {0}")]
    UnknownFormat(String),
}

impl SpintaxError {
    /// Create a missing opening delimiter error
    pub fn missing_open(format: SpintaxFormat) -> Self {
        Self::MissingOpen {
            format,
            open: format.open(),
        }
    }

    /// Create a missing closing delimiter error
    pub fn missing_close(format: SpintaxFormat) -> Self {
        Self::MissingClose {
            format,
            close: format.close(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpintaxError>;
