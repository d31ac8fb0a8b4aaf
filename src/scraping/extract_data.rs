use rust_decimal::Decimal;
use scraper::Html;

use crate::scraping::extract_price::extract_price;
use crate::scraping::extract_price_from_text::extract_price_from_text;
use crate::scraping::extract_title::extract_title;

type PriceStrategy = fn(&Html) -> Option<Decimal>;

/// Structured selectors first, free-text scan last.
const PRICE_STRATEGIES: [PriceStrategy; 2] = [extract_price, extract_price_from_text];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub title: String,
    /// `None` when no strategy found a price; zero is a real price.
    pub price: Option<Decimal>,
}

// Extract title and price from a fetched product page
pub fn extract_data(html_content: &str) -> PageData {
    let document = Html::parse_document(html_content);

    let title = extract_title(&document);
    let price = PRICE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&document));

    PageData { title, price }
}
