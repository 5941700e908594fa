//! Spintax block parsing

use crate::error::{Result, SpintaxError};
use crate::format::SpintaxFormat;
use std::fmt;

/// Split a single top-level spintax block into its options
///
/// The block must start with the format's opening delimiter and end with its
/// closing delimiter. Whitespace around the whole block is ignored. Nested
/// blocks are not expanded; inner delimiters are kept as option text.
///
/// ```
/// use spinrewriter_spintax::{SpintaxFormat, parse};
///
/// let options = parse("{first option|second option}", SpintaxFormat::PipeBraces)?;
/// assert_eq!(options, ["first option", "second option"]);
/// # Ok::<(), spinrewriter_spintax::SpintaxError>(())
/// ```
pub fn parse(raw: &str, format: SpintaxFormat) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SpintaxError::Empty);
    }

    let inner = trimmed
        .strip_prefix(format.open())
        .ok_or_else(|| SpintaxError::missing_open(format))?;
    let mut body = inner
        .strip_suffix(format.close())
        .ok_or_else(|| SpintaxError::missing_close(format))?;

    if format.is_padded() {
        body = body.trim_matches(' ');
    }

    if body.is_empty() {
        return Err(SpintaxError::EmptyBlock { format });
    }

    Ok(body
        .split(format.separator())
        .map(std::string::ToString::to_string)
        .collect())
}

/// Render options as a single block of the given format
pub fn render<S: AsRef<str>>(options: &[S], format: SpintaxFormat) -> String {
    let joined = options
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(format.separator());

    if format.is_padded() {
        format!("{} {} {}", format.open(), joined, format.close())
    } else {
        format!("{}{}{}", format.open(), joined, format.close())
    }
}

/// A spintax string together with its format and parsed options
///
/// Text that is not a single block (a whole article with several blocks,
/// say) is still kept; it just has no options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spintax {
    raw: String,
    format: SpintaxFormat,
    options: Vec<String>,
}

impl Spintax {
    /// Wrap a raw spintax string without requiring a single block
    ///
    /// ```
    /// use spinrewriter_spintax::{Spintax, SpintaxFormat};
    ///
    /// let article = Spintax::new("{Hello|Hi} world, {how|what} is it?", SpintaxFormat::PipeBraces);
    /// assert!(!article.is_block());
    /// assert_eq!(article.as_str(), "{Hello|Hi} world, {how|what} is it?");
    /// ```
    pub fn new(raw: impl Into<String>, format: SpintaxFormat) -> Self {
        let raw = raw.into();
        let options = parse(&raw, format).unwrap_or_default();
        Self {
            raw,
            format,
            options,
        }
    }

    /// Parse a raw spintax string that must be a single block
    pub fn parse(raw: impl Into<String>, format: SpintaxFormat) -> Result<Self> {
        let raw = raw.into();
        let options = parse(&raw, format)?;
        Ok(Self {
            raw,
            format,
            options,
        })
    }

    /// Build a spintax block from already separated options
    pub fn from_options<I, S>(format: SpintaxFormat, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            raw: render(&options, format),
            format,
            options,
        }
    }

    /// The raw spintax string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn format(&self) -> SpintaxFormat {
        self.format
    }

    /// Whether the raw text is one block of its format
    pub fn is_block(&self) -> bool {
        !self.options.is_empty()
    }

    /// All options in block order, empty unless [`is_block`](Self::is_block)
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Option at `index`, if present
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn num_options(&self) -> usize {
        self.options.len()
    }

    pub fn into_options(self) -> Vec<String> {
        self.options
    }
}

impl fmt::Display for Spintax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Spintax {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
