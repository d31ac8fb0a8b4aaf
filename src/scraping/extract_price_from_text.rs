use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;

use crate::scraping::clean_price::clean_price;

static CURRENCY_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[₹$]\s*[\d,]+\.?\d*").unwrap());

const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Scans the visible page text for the first currency-prefixed amount, e.g. `₹1,234` or `$123.45`.
pub fn extract_price_from_text(document: &Html) -> Option<Decimal> {
    let text = visible_text(document);

    CURRENCY_AMOUNT
        .find(&text)
        .and_then(|amount| clean_price(amount.as_str()))
}

fn visible_text(document: &Html) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            })
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}
