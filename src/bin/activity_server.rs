use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use polymarket_activity::config::{AppConfig, CONFIG_PATH};
use polymarket_activity::server::run_server;

#[derive(Parser)]
#[command(
    name = "activity-server",
    about = "HTTP proxy for Polymarket user activity lookups"
)]
struct Args {
    /// Config file path
    #[arg(long, default_value = CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured bind port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!(
        "Proxying {} on {}:{}",
        config.data_api.base_url, config.server.host, config.server.port
    );

    run_server(config).await
}
