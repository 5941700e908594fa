//! Command-line arguments.
//!
//! Credentials and connection settings can be given as flags or through the
//! environment:
//!
//! | Flag | Variable |
//! |---|---|
//! | `--email` | `SPINREWRITER_EMAIL` |
//! | `--api-key` | `SPINREWRITER_API_KEY` |
//! | `--service` | `SPINREWRITER_SERVICE` |
//! | `--endpoint` | `SPINREWRITER_ENDPOINT` |
//! | `--timeout` | `SPINREWRITER_REQUEST_TIMEOUT` |

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use spinrewriter_api::options::{self, Confidence, Param};
use spinrewriter_api::{ClientConfig, Credentials, Service, SpintaxFormat};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "spinrewriter",
    about = "Command-line client for the Spin Rewriter and Spin Writer APIs",
    version
)]
pub struct Cli {
    /// Account email address
    #[arg(long, env = "SPINREWRITER_EMAIL", global = true)]
    pub email: Option<String>,

    /// Unique API key
    #[arg(long, env = "SPINREWRITER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Service to talk to
    #[arg(
        long,
        value_enum,
        env = "SPINREWRITER_SERVICE",
        default_value_t = ServiceArg::Spinrewriter,
        global = true
    )]
    pub service: ServiceArg,

    /// Override the service endpoint URL
    #[arg(long, env = "SPINREWRITER_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SPINREWRITER_REQUEST_TIMEOUT", default_value_t = 60, global = true)]
    pub timeout: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceArg {
    Spinrewriter,
    Spinwriter,
}

impl From<ServiceArg> for Service {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Spinrewriter => Service::SpinRewriter,
            ServiceArg::Spinwriter => Service::SpinWriter,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show made and remaining API calls for the current 24-hour window
    Quota,

    /// Spin text and print the spintax options
    Spintax {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        spin: SpinArgs,

        /// Spintax format: {|}, {~}, [|], [spin] or #SPIN
        #[arg(long, default_value = "{|}")]
        format: SpintaxFormat,
    },

    /// Generate one unique variation of text
    Unique {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        spin: SpinArgs,

        #[command(flatten)]
        variation: VariationArgs,
    },

    /// Generate one unique variation of spintax input
    UniqueFromSpintax {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        spin: SpinArgs,

        #[command(flatten)]
        variation: VariationArgs,

        /// Format of the spintax input
        #[arg(long, default_value = "{|}")]
        format: SpintaxFormat,
    },

    /// Split a spintax block into its options without calling the API
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Spintax format: {|}, {~}, [|], [spin] or #SPIN
        #[arg(long, default_value = "{|}")]
        format: SpintaxFormat,
    },
}

/// Where the input text comes from; stdin when neither is given
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input text
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read input text from a file
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        let text = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            (None, None) => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                text
            }
        };

        if text.trim().is_empty() {
            bail!("input text is empty");
        }
        Ok(text)
    }
}

/// Parameters accepted by every spinning action
#[derive(Debug, Clone, Default, Args)]
pub struct SpinArgs {
    /// Keyword or phrase that must not be spun (repeatable)
    #[arg(long = "protect", value_name = "TERM")]
    pub protected_terms: Vec<String>,

    /// Protect all Capitalized Words except those in the title
    #[arg(long)]
    pub auto_protected_terms: bool,

    /// Synonym confidence level: low, medium or high
    #[arg(long)]
    pub confidence: Option<Confidence>,

    #[arg(long)]
    pub nested_spintax: bool,

    #[arg(long)]
    pub auto_sentences: bool,

    #[arg(long)]
    pub auto_paragraphs: bool,

    #[arg(long)]
    pub auto_new_paragraphs: bool,

    #[arg(long)]
    pub auto_sentence_trees: bool,

    /// Extra request parameter (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<Param>,
}

impl SpinArgs {
    pub fn params(&self) -> Vec<Param> {
        let mut params = Vec::new();
        if !self.protected_terms.is_empty() {
            params.push(options::protected_terms(&self.protected_terms));
        }
        if let Some(level) = self.confidence {
            params.push(options::confidence_level(level));
        }

        let flags: [(bool, fn() -> Param); 6] = [
            (self.auto_protected_terms, options::auto_protected_terms),
            (self.nested_spintax, options::nested_spintax),
            (self.auto_sentences, options::auto_sentences),
            (self.auto_paragraphs, options::auto_paragraphs),
            (self.auto_new_paragraphs, options::auto_new_paragraphs),
            (self.auto_sentence_trees, options::auto_sentence_trees),
        ];
        params.extend(flags.iter().filter(|(on, _)| *on).map(|(_, param)| param()));

        params.extend(self.params.iter().cloned());
        params
    }
}

/// Parameters only meaningful for unique variation actions
#[derive(Debug, Clone, Default, Args)]
pub struct VariationArgs {
    #[arg(long)]
    pub use_only_synonyms: bool,

    #[arg(long)]
    pub reorder_paragraphs: bool,

    #[arg(long)]
    pub humanize_ai: bool,

    #[arg(long)]
    pub humanize_typos: bool,

    #[arg(long)]
    pub humanize_misspellings: bool,

    #[arg(long)]
    pub humanize_homophones: bool,

    #[arg(long)]
    pub humanize_capitalization: bool,

    #[arg(long)]
    pub humanize_punctuation: bool,

    #[arg(long)]
    pub humanize_repeats: bool,

    #[arg(long)]
    pub humanize_spacing: bool,

    /// Add HTML markup for headings and lists
    #[arg(long)]
    pub html_markup: bool,

    /// Convert line breaks to <br>
    #[arg(long)]
    pub html_linebreaks: bool,
}

impl VariationArgs {
    pub fn params(&self) -> Vec<Param> {
        let flags: [(bool, fn() -> Param); 12] = [
            (self.use_only_synonyms, options::use_only_synonyms),
            (self.reorder_paragraphs, options::reorder_paragraphs),
            (self.humanize_ai, options::humanize_ai),
            (self.humanize_typos, options::humanize_typos),
            (self.humanize_misspellings, options::humanize_misspellings),
            (self.humanize_homophones, options::humanize_homophones),
            (self.humanize_capitalization, options::humanize_capitalization),
            (self.humanize_punctuation, options::humanize_punctuation),
            (self.humanize_repeats, options::humanize_repeats),
            (self.humanize_spacing, options::humanize_spacing),
            (self.html_markup, options::add_html_markup),
            (self.html_linebreaks, options::use_html_linebreaks),
        ];
        flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, param)| param())
            .collect()
    }
}

fn parse_param(s: &str) -> std::result::Result<Param, String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in {s:?}"));
    }
    Ok(Param::custom(key, value))
}

impl Cli {
    /// Parse arguments from the process command line
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn credentials(&self) -> Result<Credentials> {
        let email = self
            .email
            .clone()
            .context("missing email: pass --email or set SPINREWRITER_EMAIL")?;
        let api_key = self
            .api_key
            .clone()
            .context("missing API key: pass --api-key or set SPINREWRITER_API_KEY")?;
        Ok(Credentials::new(email, api_key))
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::for_service(self.service.into())
            .with_request_timeout(Duration::from_secs(self.timeout));
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        config
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    fn keys(params: &[Param]) -> Vec<&str> {
        params.iter().map(Param::key).collect()
    }

    #[test]
    fn test_quota_with_credentials() {
        let cli = parse(&[
            "spinrewriter",
            "--email",
            "me@example.com",
            "--api-key",
            "k",
            "quota",
        ]);
        assert!(matches!(cli.command, Command::Quota));

        let credentials = cli.credentials().expect("credentials given");
        assert_eq!(credentials.email(), "me@example.com");
        assert_eq!(credentials.api_key(), "k");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "spinrewriter",
            "quota",
            "--service",
            "spinwriter",
            "--endpoint",
            "http://127.0.0.1:9000/api",
            "--timeout",
            "5",
            "--json",
        ]);
        assert_eq!(cli.service, ServiceArg::Spinwriter);
        assert!(cli.json);

        let config = cli.client_config();
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_service_endpoint() {
        let mut cli = parse(&["spinrewriter", "--service", "spinwriter", "quota"]);
        // SPINREWRITER_ENDPOINT may be set in the environment
        cli.endpoint = None;
        assert_eq!(cli.service, ServiceArg::Spinwriter);
        assert_eq!(
            cli.client_config().endpoint,
            spinrewriter_api::SPINWRITER_ENDPOINT
        );
    }

    #[test]
    fn test_spintax_args() {
        let cli = parse(&[
            "spinrewriter",
            "spintax",
            "Hello world",
            "--format",
            "[spin]",
            "--protect",
            "SEO",
            "--protect",
            "Hello",
            "--confidence",
            "high",
            "--nested-spintax",
            "--param",
            "auto_protected_terms=false",
        ]);

        let Command::Spintax {
            input,
            spin,
            format,
        } = cli.command
        else {
            panic!("expected spintax command");
        };

        assert_eq!(input.text.as_deref(), Some("Hello world"));
        assert_eq!(format, SpintaxFormat::SpinBrackets);

        let params = spin.params();
        assert_eq!(
            keys(&params),
            vec![
                "protected_terms",
                "confidence_level",
                "nested_spintax",
                "auto_protected_terms"
            ]
        );
        assert_eq!(params[0].value(), "SEO\nHello");
        assert_eq!(params[1].value(), "high");
        assert_eq!(params[3].value(), "false");
    }

    #[test]
    fn test_unique_variation_flags() {
        let cli = parse(&[
            "spinrewriter",
            "unique",
            "text",
            "--humanize-typos",
            "--html-linebreaks",
            "--reorder-paragraphs",
        ]);
        let Command::Unique { variation, .. } = cli.command else {
            panic!("expected unique command");
        };
        assert_eq!(
            keys(&variation.params()),
            vec!["reorder_paragraphs", "humanize_typos", "use_html_linebreaks"]
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["spinrewriter", "parse", "x", "--format", "<|>"]).is_err());
        assert!(
            Cli::try_parse_from(["spinrewriter", "spintax", "x", "--confidence", "max"]).is_err()
        );
        assert!(Cli::try_parse_from(["spinrewriter", "spintax", "x", "--param", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["spinrewriter", "spintax", "x", "--param", "=v"]).is_err());
    }

    #[test]
    fn test_text_conflicts_with_file() {
        assert!(
            Cli::try_parse_from(["spinrewriter", "parse", "x", "--file", "input.txt"]).is_err()
        );
    }

    #[test]
    fn test_input_from_text() {
        let input = InputArgs {
            text: Some("{a|b}".to_string()),
            file: None,
        };
        assert_eq!(input.read().expect("text input"), "{a|b}");

        let blank = InputArgs {
            text: Some("  ".to_string()),
            file: None,
        };
        assert!(blank.read().is_err());
    }

    #[test]
    fn test_missing_file() {
        let input = InputArgs {
            text: None,
            file: Some(PathBuf::from("/nonexistent/spinrewriter-input.txt")),
        };
        let err = input.read().expect_err("file does not exist");
        assert!(err.to_string().contains("spinrewriter-input.txt"));
    }
}
