use std::env;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use price_tracker::config::load_config;
use price_tracker::notify::SmtpNotifier;
use price_tracker::utilities::HttpFetcher;
use price_tracker::PriceTracker;

const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Runs a single check cycle; repeat it with cron or a systemd timer.
#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("{}", "Price Tracker Started".green());
    println!("{}", "=".repeat(60));

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Load configuration settings
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {:#}", e).red());
            return Err(e);
        }
    };

    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout())?;
    let notifier = SmtpNotifier::new(config.email.clone());
    let tracker = PriceTracker::new(&config, fetcher, notifier);

    if let Err(e) = tracker.check_products().await {
        eprintln!("{}", format!("Failed to record price history: {:#}", e).red());
        return Err(e);
    }

    Ok(())
}
