//! tierlab CLI - launches the three-tier reference server
//!
//! Configuration comes from the environment (with optional `.env` file);
//! the listening port and bind address can be overridden on the command
//! line.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tierlab_server::{run_server, AppConfig};

#[derive(Parser, Debug)]
#[command(
    name = "tierlab",
    author,
    version,
    about = "Three-tier reference service: HTTP API over a Postgres users store"
)]
struct Cli {
    /// Port to listen on (overrides APP_PORT/PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing::info!(
        environment = %config.environment,
        dev_mode = config.dev_mode,
        "Configuration loaded"
    );

    run_server(config, &cli.bind).await?;
    Ok(())
}
