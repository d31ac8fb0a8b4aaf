use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use rust_decimal::Decimal;

use crate::config::{ProductConfig, TrackerConfig};
use crate::history::{append_record, PriceRecord};
use crate::notify::{compose_alert, SendAlert};
use crate::scraping::extract_data;
use crate::utilities::{politeness_pause, FetchPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Price recorded and at or below the threshold; `delivered` is false when the mail failed.
    Alerted { delivered: bool },
    AboveThreshold,
    /// Page fetched but no price found; nothing recorded.
    NoPrice,
    FetchFailed,
}

#[derive(Debug, Default)]
pub struct CycleSummary {
    pub outcomes: Vec<(String, CheckOutcome)>,
}

impl CycleSummary {
    fn count(&self, matches: impl Fn(&CheckOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| matches(outcome)).count()
    }

    pub fn checked(&self) -> usize {
        self.outcomes.len()
    }

    pub fn recorded(&self) -> usize {
        self.count(|outcome| {
            matches!(outcome, CheckOutcome::Alerted { .. } | CheckOutcome::AboveThreshold)
        })
    }

    pub fn alerts_sent(&self) -> usize {
        self.count(|outcome| *outcome == CheckOutcome::Alerted { delivered: true })
    }

    pub fn alerts_failed(&self) -> usize {
        self.count(|outcome| *outcome == CheckOutcome::Alerted { delivered: false })
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, CheckOutcome::NoPrice | CheckOutcome::FetchFailed))
    }
}

/// The threshold is inclusive: a price equal to it alerts.
pub fn is_at_or_below(price: Decimal, threshold: Decimal) -> bool {
    price <= threshold
}

pub struct PriceTracker<'a, F, N> {
    config: &'a TrackerConfig,
    fetcher: F,
    notifier: N,
}

impl<'a, F: FetchPage, N: SendAlert> PriceTracker<'a, F, N> {
    pub fn new(config: &'a TrackerConfig, fetcher: F, notifier: N) -> Self {
        PriceTracker {
            config,
            fetcher,
            notifier,
        }
    }

    /// Runs one check cycle over every configured product, in order.
    ///
    /// Fetch and mail failures are reported and the cycle moves on; a history
    /// write failure ends the cycle with an error.
    pub async fn check_products(&self) -> Result<CycleSummary> {
        println!(
            "\nChecking prices... {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        println!("{}", "-".repeat(60));

        let mut summary = CycleSummary::default();

        for product in &self.config.products {
            let outcome = self.check_product(product).await?;
            summary.outcomes.push((product.name.clone(), outcome));

            politeness_pause(self.config.pause()).await;
        }

        println!("\n{}", "=".repeat(60));
        println!(
            "{}",
            format!(
                "Check complete! {} checked, {} recorded, {} alerts sent, {} alerts failed, {} skipped",
                summary.checked(),
                summary.recorded(),
                summary.alerts_sent(),
                summary.alerts_failed(),
                summary.skipped()
            )
            .green()
        );

        Ok(summary)
    }

    async fn check_product(&self, product: &ProductConfig) -> Result<CheckOutcome> {
        let currency = &self.config.currency_symbol;
        let threshold = self.config.threshold;

        println!("\nChecking: {}", product.name);

        let html_content = match self.fetcher.fetch_page(&product.url).await {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{}", format!("  Error scraping {}: {:#}", product.url, e).red());
                return Ok(CheckOutcome::FetchFailed);
            }
        };

        let record = PriceRecord::new(extract_data(&html_content), &product.url);

        let Some(price) = record.price else {
            eprintln!("{}", "  Could not fetch price".red());
            return Ok(CheckOutcome::NoPrice);
        };

        println!("  Current price: {}{}", currency, price);

        append_record(&record, &self.config.history_file).await?;

        if !is_at_or_below(price, threshold) {
            println!("  Price still above threshold ({}{})", currency, threshold);
            return Ok(CheckOutcome::AboveThreshold);
        }

        println!(
            "{}",
            format!("  ALERT! Price below threshold ({}{})", currency, threshold).yellow()
        );

        let alert = compose_alert(&record, threshold, currency);
        let delivered = match self.notifier.send_alert(&alert).await {
            Ok(()) => {
                println!("{}", "  Alert email sent!".green());
                true
            }
            Err(e) => {
                eprintln!("{}", format!("  Failed to send email: {:#}", e).red());
                false
            }
        };

        Ok(CheckOutcome::Alerted { delivered })
    }
}
