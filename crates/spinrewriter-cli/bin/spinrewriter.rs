//! spinrewriter binary entry point.
//!
//! Parses arguments, initializes logging on stderr and runs one command.

use anyhow::Result;
use spinrewriter_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::from_args();

    let mut stdout = std::io::stdout().lock();
    spinrewriter_cli::run(&cli, &mut stdout).await?;

    Ok(())
}
