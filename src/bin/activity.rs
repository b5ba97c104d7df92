use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use url::Url;

use polymarket_activity::api::{fetch_all_activity, fetch_user_activity};
use polymarket_activity::config::{AppConfig, CONFIG_PATH};
use polymarket_activity::debounce::Debouncer;
use polymarket_activity::types::ActivitySummary;
use polymarket_activity::view;

#[derive(Parser)]
#[command(name = "activity", about = "Search a trader's Polymarket activity history")]
struct Args {
    /// Trader proxy wallet address to look up
    user: Option<String>,

    /// Maximum number of records to fetch
    #[arg(long, default_value_t = 100)]
    limit: i32,

    /// Paginate through the entire history instead of one page
    #[arg(long, conflicts_with = "limit")]
    all: bool,

    /// Emit records as JSON lines instead of a table
    #[arg(long)]
    json: bool,

    /// Read addresses from stdin, debounced, and search as they settle
    #[arg(long, conflicts_with = "user")]
    interactive: bool,

    /// Config file path
    #[arg(long, default_value = CONFIG_PATH)]
    config: PathBuf,
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
    if args.limit <= 0 {
        anyhow::bail!("--limit must be positive");
    }

    let config = AppConfig::load_or_default(&args.config)?;
    let base_url = config.data_api_base_url()?;
    let client = reqwest::Client::new();

    if args.interactive {
        let delay = Duration::from_millis(config.settings.debounce_ms);
        return interactive(&client, &base_url, delay, args.limit, args.json).await;
    }

    let user = match args.user.as_deref().map(str::trim) {
        Some(user) if !user.is_empty() => user.to_string(),
        _ => anyhow::bail!("A user address is required (or pass --interactive)"),
    };

    info!("Fetching activity for {user}");
    let records = if args.all {
        fetch_all_activity(&client, &base_url, &user).await?
    } else {
        fetch_user_activity(&client, &base_url, &user, args.limit, 0).await?
    };

    report(&records, args.json)?;
    Ok(())
}

/// Read queries from stdin and search once input has been stable for the
/// configured debounce interval. A newer line cancels the pending search.
async fn interactive(
    client: &reqwest::Client,
    base_url: &Url,
    delay: Duration,
    limit: i32,
    json: bool,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut debouncer: Debouncer<String> = Debouncer::new(delay);
    println!("Enter a user address to search for activity.");

    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        let query = line.trim().to_string();
                        if query.is_empty() {
                            debouncer.clear();
                        } else {
                            debouncer.update(query);
                        }
                    }
                    // stdin closed
                    None => break,
                }
            }
            () = tokio::time::sleep_until(
                deadline.unwrap_or_else(tokio::time::Instant::now)
            ), if deadline.is_some() => {
                if let Some(user) = debouncer.settled() {
                    match fetch_user_activity(client, base_url, &user, limit, 0).await {
                        Ok(records) => report(&records, json)?,
                        Err(e) => warn!("Activity lookup failed: {e:#}"),
                    }
                }
            }
        }
    }
    Ok(())
}

/// Emit records as a table plus summary block, or as JSON lines.
fn report(records: &[polymarket_activity::types::Activity], json: bool) -> Result<()> {
    if json {
        for record in records {
            println!("{}", serde_json::to_string(record)?);
        }
        return Ok(());
    }

    print!("{}", view::render_table(records));
    if !records.is_empty() {
        println!();
        print!(
            "{}",
            view::render_summary(&ActivitySummary::from_records(records))
        );
    }
    Ok(())
}
