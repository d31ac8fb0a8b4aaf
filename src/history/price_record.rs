use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;

use crate::scraping::PageData;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const HEADERS: [&str; 4] = ["timestamp", "title", "price", "url"];

/// One price check of one product, as stored in the history file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    pub timestamp: NaiveDateTime,
    pub title: String,
    pub price: Option<Decimal>,
    pub url: String,
}

impl PriceRecord {
    /// Stamps freshly extracted page data with the current local time, to the second.
    pub fn new(page: PageData, url: &str) -> Self {
        Self {
            timestamp: Local::now().naive_local().trunc_subsecs(0),
            title: page.title,
            price: page.price,
            url: url.to_string(),
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Fields in history column order; a missing price is an empty field.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.formatted_timestamp(),
            self.title.clone(),
            self.price.map(|price| price.to_string()).unwrap_or_default(),
            self.url.clone(),
        ]
    }

    pub fn from_row(row: &csv_async::StringRecord) -> Result<Self> {
        let field = |index: usize| {
            row.get(index)
                .ok_or_else(|| anyhow!("History row is missing the '{}' column", HEADERS[index]))
        };

        let timestamp = NaiveDateTime::parse_from_str(field(0)?, TIMESTAMP_FORMAT)
            .context("Invalid timestamp in history row")?;
        let price = match field(2)?.trim() {
            "" => None,
            price => Some(Decimal::from_str(price).context("Invalid price in history row")?),
        };

        Ok(Self {
            timestamp,
            title: field(1)?.to_string(),
            price,
            url: field(3)?.to_string(),
        })
    }
}
