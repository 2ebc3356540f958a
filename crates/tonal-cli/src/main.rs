//! Tonal - Sentiment & Emotion Analysis Gateway
//!
//! Forwards inline text or page URLs to an external NLU service and
//! relays back a sentiment label or emotion breakdown.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonal_nlu::{NluClient, NluConfig};
use tonal_web::state::AppState;

/// Analysis gateway for an external NLU service.
#[derive(Parser)]
#[command(name = "tonal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API key for the external NLU service
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the external NLU service
    #[arg(long, env = "API_URL")]
    api_url: String,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Deadline in seconds for one external call
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tonal=info,tonal_web=debug,tonal_nlu=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = NluConfig::new(cli.api_key, cli.api_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let state = AppState::new(NluClient::new(&config));

    println!();
    println!("  {} {}", "Tonal".cyan().bold(), "Analysis Gateway".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Landing".green(),
        cli.host,
        cli.port
    );
    println!(
        "  {}   http://{}:{}/text/sentiment?text=...",
        "Routes".green(),
        cli.host,
        cli.port
    );
    println!(
        "          http://{}:{}/url/emotion?url=...",
        cli.host, cli.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tonal_web::run_server(state, &cli.host, cli.port).await
}
