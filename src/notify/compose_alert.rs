use rust_decimal::Decimal;

use crate::history::PriceRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

/// Builds the plain-text alert for a price at or below the threshold.
pub fn compose_alert(record: &PriceRecord, threshold: Decimal, currency: &str) -> AlertMessage {
    let price = record
        .price
        .map(|price| price.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let body = format!(
        "Good news! The price has dropped below your threshold.\n\
         \n\
         Product: {title}\n\
         Current Price: {currency}{price}\n\
         Your Threshold: {currency}{threshold}\n\
         \n\
         Check it out: {url}\n\
         \n\
         Time: {time}\n",
        title = record.title,
        url = record.url,
        time = record.formatted_timestamp(),
    );

    AlertMessage {
        subject: format!("Price Alert! {}", record.title),
        body,
    }
}
