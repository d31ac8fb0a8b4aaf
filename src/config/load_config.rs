use std::path::Path;

use ::config::{Config, Environment, File};
use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;

use crate::config::TrackerConfig;

/// Loads the tracker settings from `file_path`, layered with `TRACKER_*` environment variables.
///
/// The file format follows the extension (`config.json`, `Settings.toml`, ...).
/// Nested keys use a double underscore, e.g. `TRACKER_EMAIL__PASSWORD`.
pub fn load_config(file_path: &Path) -> Result<TrackerConfig> {
    let settings = Config::builder()
        .add_source(File::from(file_path))
        .add_source(
            Environment::with_prefix("TRACKER")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to read configuration from {}", file_path.display()))?;

    let config: TrackerConfig = settings
        .try_deserialize()
        .context("Failed to parse configuration")?;

    if config.threshold < Decimal::ZERO {
        bail!("Threshold must not be negative, got {}", config.threshold);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{Builder, NamedTempFile};

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_config_reads_products_in_order() {
        let file = write_config(
            r#"{
                "threshold": 499.99,
                "products": [
                    {"name": "Headphones", "url": "https://shop.example/a"},
                    {"name": "Keyboard", "url": "https://shop.example/b"}
                ],
                "email": {"sender": "me@example.com", "receiver": "you@example.com", "password": "secret"}
            }"#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.threshold, Decimal::new(49999, 2));
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].name, "Headphones");
        assert_eq!(config.products[1].url, "https://shop.example/b");
        assert_eq!(config.email.receiver, "you@example.com");
    }

    #[test]
    fn load_config_applies_defaults() {
        let file = write_config(
            r#"{
                "threshold": 500,
                "products": [],
                "email": {"sender": "me@example.com", "receiver": "you@example.com", "password": "secret"}
            }"#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.threshold, Decimal::new(500, 0));
        assert_eq!(config.history_file, Path::new("price_history.csv"));
        assert_eq!(config.pause_ms, 2000);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.email.smtp_host, "smtp.gmail.com");
        assert_eq!(config.email.smtp_port, 587);
    }

    #[test]
    fn load_config_rejects_negative_threshold() {
        let file = write_config(
            r#"{
                "threshold": -1,
                "products": [],
                "email": {"sender": "me@example.com", "receiver": "you@example.com", "password": "secret"}
            }"#,
        );

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn load_config_fails_on_missing_email() {
        let file = write_config(r#"{"threshold": 10, "products": []}"#);

        assert!(load_config(file.path()).is_err());
    }
}
