//! Command execution.

use anyhow::{Context, Result};
use serde_json::json;
use spinrewriter_api::options::Param;
use spinrewriter_api::{Quota, Service, SpinRewriter, SpinWriter, Spintax};
use std::io::Write;
use tracing::{debug, info};

use crate::args::{Cli, Command, ServiceArg};

/// Client for whichever service was selected
#[derive(Debug, Clone)]
pub enum ServiceClient {
    Rewriter(SpinRewriter),
    Writer(SpinWriter),
}

impl ServiceClient {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let credentials = cli.credentials()?;
        let config = cli.client_config();
        debug!("Using {} endpoint {}", Service::from(cli.service), config.endpoint);

        Ok(match cli.service {
            ServiceArg::Spinrewriter => {
                Self::Rewriter(SpinRewriter::with_config(credentials, &config)?)
            }
            ServiceArg::Spinwriter => Self::Writer(SpinWriter::with_config(credentials, &config)?),
        })
    }

    async fn quota(&self) -> Result<Quota> {
        Ok(match self {
            Self::Rewriter(client) => client.quota().await?,
            Self::Writer(client) => client.quota().await?,
        })
    }

    async fn spintax(&self, text: &str, params: Vec<Param>) -> Result<(Spintax, Option<Quota>)> {
        Ok(match self {
            Self::Rewriter(client) => {
                let spun = client.spintax(text, params).await?;
                (spun.spintax, Some(spun.quota))
            }
            Self::Writer(client) => (client.spintax(text, params).await?, None),
        })
    }

    async fn unique_variation(&self, text: &str, params: Vec<Param>) -> Result<String> {
        Ok(match self {
            Self::Rewriter(client) => client.unique_variation(text, params).await?,
            Self::Writer(client) => client.unique_variation(text, params).await?,
        })
    }

    async fn unique_spintax_variation(
        &self,
        spintax: &Spintax,
        params: Vec<Param>,
    ) -> Result<String> {
        Ok(match self {
            Self::Rewriter(client) => client.unique_spintax_variation(spintax, params).await?,
            Self::Writer(client) => {
                client
                    .unique_spintax_variation(spintax.as_str(), params)
                    .await?
            }
        })
    }
}

/// Run the selected command, writing results to `out`
pub async fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Parse { input, format } => {
            let spintax = Spintax::parse(input.read()?, *format)
                .context("input is not a single spintax block")?;
            write_spintax(out, cli.json, &spintax, None)
        }
        Command::Quota => {
            let client = ServiceClient::from_cli(cli)?;
            let quota = client.quota().await?;
            info!(
                "{} calls made, {} available",
                quota.requests_made, quota.requests_available
            );

            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&quota)?)?;
            } else {
                writeln!(out, "requests made:      {}", quota.requests_made)?;
                writeln!(out, "requests available: {}", quota.requests_available)?;
            }
            Ok(())
        }
        Command::Spintax {
            input,
            spin,
            format,
        } => {
            let text = input.read()?;
            let client = ServiceClient::from_cli(cli)?;

            let mut params = spin.params();
            params.push(spinrewriter_api::options::spintax_format(*format));
            let (spintax, quota) = client.spintax(&text, params).await?;
            write_spintax(out, cli.json, &spintax, quota)
        }
        Command::Unique {
            input,
            spin,
            variation,
        } => {
            let text = input.read()?;
            let client = ServiceClient::from_cli(cli)?;

            let mut params = spin.params();
            params.extend(variation.params());
            let unique = client.unique_variation(&text, params).await?;
            write_text(out, cli.json, &unique)
        }
        Command::UniqueFromSpintax {
            input,
            spin,
            variation,
            format,
        } => {
            let spintax = Spintax::new(input.read()?, *format);
            let client = ServiceClient::from_cli(cli)?;

            let mut params = spin.params();
            params.extend(variation.params());
            let unique = client.unique_spintax_variation(&spintax, params).await?;
            write_text(out, cli.json, &unique)
        }
    }
}

fn write_spintax(
    out: &mut impl Write,
    as_json: bool,
    spintax: &Spintax,
    quota: Option<Quota>,
) -> Result<()> {
    if as_json {
        let value = json!({
            "format": spintax.format(),
            "spintax": spintax.as_str(),
            "options": spintax.options(),
            "quota": quota,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else if spintax.is_block() {
        for option in spintax.options() {
            writeln!(out, "{option}")?;
        }
    } else {
        writeln!(out, "{}", spintax.as_str().trim_end())?;
    }
    Ok(())
}

fn write_text(out: &mut impl Write, as_json: bool, text: &str) -> Result<()> {
    if as_json {
        writeln!(out, "{}", json!({ "text": text }))?;
    } else {
        writeln!(out, "{}", text.trim_end())?;
    }
    Ok(())
}

