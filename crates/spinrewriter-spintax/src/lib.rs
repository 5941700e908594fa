//! Spintax support for Spin Rewriter and Spin Writer output
//!
//! Spintax is a markup convention that packs several interchangeable
//! phrasings into one bracketed block. The services can return it in five
//! conventions:
//!
//! | Format | Example |
//! |---|---|
//! | [`SpintaxFormat::PipeBraces`] | `{first option\|second option}` |
//! | [`SpintaxFormat::TildeBraces`] | `{first option~second option}` |
//! | [`SpintaxFormat::PipeBrackets`] | `[first option\|second option]` |
//! | [`SpintaxFormat::SpinBrackets`] | `[spin]first option\|second option[/spin]` |
//! | [`SpintaxFormat::HashSpin`] | `{#SPIN: first option \|\| second option #}` |
//!
//! Only one top-level block is handled. Malformed input is reported as a
//! [`SpintaxError`].
//!
//! # Example
//!
//! ```
//! use spinrewriter_spintax::{Spintax, SpintaxFormat};
//!
//! let spintax = Spintax::parse("[spin]hello|hi|hey[/spin]", SpintaxFormat::SpinBrackets)?;
//! assert_eq!(spintax.num_options(), 3);
//! assert_eq!(spintax.option(1), Some("hi"));
//!
//! let rebuilt = Spintax::from_options(SpintaxFormat::HashSpin, spintax.options().to_vec());
//! assert_eq!(rebuilt.as_str(), "{#SPIN: hello || hi || hey #}");
//! # Ok::<(), spinrewriter_spintax::SpintaxError>(())
//! ```

pub mod error;
pub mod format;
pub mod spintax;

pub use error::{Result, SpintaxError};
pub use format::SpintaxFormat;
pub use spintax::{Spintax, parse, render};
