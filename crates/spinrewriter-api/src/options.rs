//! Optional request parameters
//!
//! Every builder returns one [`Param`]. Params are collected into
//! [`RequestOptions`], where a later param replaces an earlier one with the
//! same key. Nothing here validates values; the service decides what is legal
//! for each action.
//!
//! ```
//! use spinrewriter_api::options::{self, Confidence, RequestOptions};
//! use spinrewriter_api::SpintaxFormat;
//!
//! let request: RequestOptions = [
//!     options::protected_terms(["SEO", "Spin Rewriter"]),
//!     options::confidence_level(Confidence::High),
//!     options::spintax_format(SpintaxFormat::SpinBrackets),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(request.get("protected_terms"), Some("SEO\nSpin Rewriter"));
//! assert_eq!(request.get("spintax_format"), Some("[spin]"));
//! ```

use serde::{Deserialize, Serialize};
use spinrewriter_spintax::{SpintaxError, SpintaxFormat};
use std::collections::BTreeMap;
use std::fmt;

pub(crate) const TEXT: &str = "text";
pub(crate) const SPINTAX_FORMAT: &str = "spintax_format";

/// Synonym confidence level of the One-Click Rewrite process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Largest number of synonyms, least readable variations
    Low,
    /// Relatively reliable synonyms, usually well readable variations
    #[default]
    Medium,
    /// Only the most reliable synonyms, perfectly readable variations
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            _ => None,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Confidence::parse(s).ok_or_else(|| format!("invalid confidence level: {s}"))
    }
}

/// One request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    key: String,
    value: String,
}

impl Param {
    /// Arbitrary parameter not covered by a builder
    pub fn custom(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn flag(key: &str) -> Self {
        Self::custom(key, "true")
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Set of request parameters, unique by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    params: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a param, replacing any earlier value for the same key
    pub fn set(&mut self, param: Param) {
        self.params.insert(param.key, param.value);
    }

    #[must_use]
    pub fn with(mut self, param: Param) -> Self {
        self.set(param);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Key/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Requested spintax output format, `{|}` when unset
    pub fn spintax_format(&self) -> Result<SpintaxFormat, SpintaxError> {
        self.get(SPINTAX_FORMAT)
            .map_or(Ok(SpintaxFormat::default()), str::parse)
    }
}

impl FromIterator<Param> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl Extend<Param> for RequestOptions {
    fn extend<I: IntoIterator<Item = Param>>(&mut self, iter: I) {
        for param in iter {
            self.set(param);
        }
    }
}

impl IntoIterator for RequestOptions {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params
            .into_iter()
            .map(|(key, value)| Param { key, value })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Text to rewrite or spin
pub(crate) fn text(text: &str) -> Param {
    Param::custom(TEXT, text)
}

/// Keywords and key phrases that must not be spun, sent one per line
pub fn protected_terms<I, S>(terms: I) -> Param
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = terms
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Param::custom("protected_terms", joined)
}

/// Protect all Capitalized Words except those in the title
pub fn auto_protected_terms() -> Param {
    Param::flag("auto_protected_terms")
}

pub fn confidence_level(level: Confidence) -> Param {
    Param::custom("confidence_level", level.as_str())
}

/// Also spin single words inside already spun phrases (two nesting levels)
pub fn nested_spintax() -> Param {
    Param::flag("nested_spintax")
}

/// Replace some sentences with a shorter spun variation
pub fn auto_sentences() -> Param {
    Param::flag("auto_sentences")
}

/// Replace some paragraphs with a shorter spun variation
pub fn auto_paragraphs() -> Param {
    Param::flag("auto_paragraphs")
}

/// Let the service write additional paragraphs
pub fn auto_new_paragraphs() -> Param {
    Param::flag("auto_new_paragraphs")
}

/// Change the structure of phrases and sentences
pub fn auto_sentence_trees() -> Param {
    Param::flag("auto_sentence_trees")
}

/// Never keep an original word when a synonym exists
pub fn use_only_synonyms() -> Param {
    Param::flag("use_only_synonyms")
}

/// Randomize paragraph and unordered list order
pub fn reorder_paragraphs() -> Param {
    Param::flag("reorder_paragraphs")
}

pub fn humanize_ai() -> Param {
    Param::flag("humanize_ai")
}

pub fn humanize_typos() -> Param {
    Param::flag("humanize_typos")
}

pub fn humanize_misspellings() -> Param {
    Param::flag("humanize_misspellings")
}

pub fn humanize_homophones() -> Param {
    Param::flag("humanize_homophones")
}

pub fn humanize_capitalization() -> Param {
    Param::flag("humanize_capitalization")
}

pub fn humanize_punctuation() -> Param {
    Param::flag("humanize_punctuation")
}

pub fn humanize_repeats() -> Param {
    Param::flag("humanize_repeats")
}

pub fn humanize_spacing() -> Param {
    Param::flag("humanize_spacing")
}

/// Add `<h1>`, `<h2>`, `<ul>` and `<li>` markup to generated articles
pub fn add_html_markup() -> Param {
    Param::flag("add_html_markup")
}

/// Convert newlines in generated articles to `<br>`
pub fn use_html_linebreaks() -> Param {
    Param::flag("use_html_linebreaks")
}

/// Spintax format of the returned spun text (`text_with_spintax` only)
pub fn spintax_format(format: SpintaxFormat) -> Param {
    Param::custom(SPINTAX_FORMAT, format.as_str())
}
