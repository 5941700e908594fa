//! Spintax format conventions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bracket and separator convention of a spintax block
///
/// The wire tag (see [`SpintaxFormat::as_str`]) is the value the service
/// expects in the `spintax_format` request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpintaxFormat {
    /// `{first option|second option}`
    #[default]
    #[serde(rename = "{|}")]
    PipeBraces,
    /// `{first option~second option}`
    #[serde(rename = "{~}")]
    TildeBraces,
    /// `[first option|second option]`
    #[serde(rename = "[|]")]
    PipeBrackets,
    /// `[spin]first option|second option[/spin]`
    #[serde(rename = "[spin]")]
    SpinBrackets,
    /// `{#SPIN: first option || second option #}`
    #[serde(rename = "#SPIN")]
    HashSpin,
}

impl SpintaxFormat {
    /// Get all supported formats
    pub fn all() -> &'static [SpintaxFormat] {
        &[
            SpintaxFormat::PipeBraces,
            SpintaxFormat::TildeBraces,
            SpintaxFormat::PipeBrackets,
            SpintaxFormat::SpinBrackets,
            SpintaxFormat::HashSpin,
        ]
    }

    /// Wire tag sent as the `spintax_format` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SpintaxFormat::PipeBraces => "{|}",
            SpintaxFormat::TildeBraces => "{~}",
            SpintaxFormat::PipeBrackets => "[|]",
            SpintaxFormat::SpinBrackets => "[spin]",
            SpintaxFormat::HashSpin => "#SPIN",
        }
    }

    /// Parse a format from its wire tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "{|}" => Some(SpintaxFormat::PipeBraces),
            "{~}" => Some(SpintaxFormat::TildeBraces),
            "[|]" => Some(SpintaxFormat::PipeBrackets),
            "[spin]" => Some(SpintaxFormat::SpinBrackets),
            "#SPIN" => Some(SpintaxFormat::HashSpin),
            _ => None,
        }
    }

    /// Delimiter that opens a block
    pub fn open(&self) -> &'static str {
        match self {
            SpintaxFormat::PipeBraces | SpintaxFormat::TildeBraces => "{",
            SpintaxFormat::PipeBrackets => "[",
            SpintaxFormat::SpinBrackets => "[spin]",
            SpintaxFormat::HashSpin => "{#SPIN:",
        }
    }

    /// Delimiter that closes a block
    pub fn close(&self) -> &'static str {
        match self {
            SpintaxFormat::PipeBraces | SpintaxFormat::TildeBraces => "}",
            SpintaxFormat::PipeBrackets => "]",
            SpintaxFormat::SpinBrackets => "[/spin]",
            SpintaxFormat::HashSpin => "#}",
        }
    }

    /// Token separating the options inside a block
    pub fn separator(&self) -> &'static str {
        match self {
            SpintaxFormat::PipeBraces
            | SpintaxFormat::PipeBrackets
            | SpintaxFormat::SpinBrackets => "|",
            SpintaxFormat::TildeBraces => "~",
            SpintaxFormat::HashSpin => " || ",
        }
    }

    /// Whether the block body is padded with spaces inside the delimiters
    pub(crate) fn is_padded(&self) -> bool {
        matches!(self, SpintaxFormat::HashSpin)
    }
}

impl fmt::Display for SpintaxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpintaxFormat {
    type Err = crate::SpintaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpintaxFormat::parse(s).ok_or_else(|| crate::SpintaxError::UnknownFormat(s.to_string()))
    }
}
