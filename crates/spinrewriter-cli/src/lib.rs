//! Command-line front end for the Spin Rewriter and Spin Writer APIs.
//!
//! The `spinrewriter` binary is a thin wrapper over this library:
//!
//! ```text
//! spinrewriter quota
//! spinrewriter spintax "The quick brown fox." --format "[spin]" --protect fox
//! spinrewriter unique --file article.txt --humanize-typos --confidence high
//! spinrewriter unique-from-spintax "{quick|fast} fox"
//! spinrewriter parse "{#SPIN: big || large #}" --format "#SPIN"
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::{ServiceClient, run};
