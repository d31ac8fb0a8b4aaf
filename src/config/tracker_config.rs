use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    #[serde(deserialize_with = "deserialize_amount")]
    pub threshold: Decimal,
    pub products: Vec<ProductConfig>,
    pub email: EmailConfig,
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub sender: String,
    pub receiver: String,
    pub password: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

impl TrackerConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_history_file() -> PathBuf {
    PathBuf::from("price_history.csv")
}

fn default_pause_ms() -> u64 {
    2000
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Amounts arrive as JSON numbers from the file and as strings from the environment.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawAmount::deserialize(deserializer)? {
        // Shortest round-trip form, so 499.99 stays 499.99
        RawAmount::Number(value) => value.to_string(),
        RawAmount::Text(value) => value.trim().to_string(),
    };

    Decimal::from_str(&text).map_err(serde::de::Error::custom)
}
