use std::sync::LazyLock;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};

use crate::scraping::clean_price::clean_price;

/// Price containers in priority order: Amazon, generic classes, microdata, Open Graph metadata.
pub const PRICE_SELECTORS: [&str; 5] = [
    "span.a-price-whole",
    "span.price",
    "div.price",
    "span[itemprop=\"price\"]",
    "meta[property=\"product:price:amount\"]",
];

static SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    PRICE_SELECTORS
        .iter()
        .map(|selector| Selector::parse(selector).unwrap())
        .collect()
});

/// Returns the first parseable price across the selector cascade.
///
/// Only the first element matching each selector is looked at; an unparseable
/// value moves on to the next selector.
pub fn extract_price(document: &Html) -> Option<Decimal> {
    SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next().and_then(element_price))
}

fn element_price(element: ElementRef) -> Option<Decimal> {
    let text = element.text().collect::<String>();

    // <meta> and microdata tags carry the amount in `content`
    clean_price(text.trim())
        .or_else(|| element.value().attr("content").and_then(clean_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_price_amazon_whole_works() {
        let document = Html::parse_document(
            r#"<html><body>
                <span class="a-price-whole">1,499</span>
                <span class="price">$9.99</span>
            </body></html>"#,
        );
        assert_eq!(extract_price(&document), Some(Decimal::new(1499, 0)));
    }

    #[test]
    fn extract_price_skips_non_numeric_selector() {
        let document = Html::parse_document(
            r#"<html><body>
                <span class="price">Call for price</span>
                <div class="price">₹2,350.75</div>
            </body></html>"#,
        );
        assert_eq!(extract_price(&document), Some(Decimal::new(235075, 2)));
    }

    #[test]
    fn extract_price_only_reads_first_match_of_a_selector() {
        let document = Html::parse_document(
            r#"<html><body>
                <span class="price">sold out</span>
                <span class="price">$15</span>
            </body></html>"#,
        );
        assert_eq!(extract_price(&document), None);
    }

    #[test]
    fn extract_price_microdata_content_works() {
        let document = Html::parse_document(
            r#"<html><body><span itemprop="price" content="749.00"></span></body></html>"#,
        );
        assert_eq!(extract_price(&document), Some(Decimal::new(74900, 2)));
    }

    #[test]
    fn extract_price_microdata_content_wins_over_label() {
        let document = Html::parse_document(
            r#"<html><body><span itemprop="price" content="749.00">Sale!</span></body></html>"#,
        );
        assert_eq!(extract_price(&document), Some(Decimal::new(74900, 2)));
    }

    #[test]
    fn extract_price_meta_tag_works() {
        let document = Html::parse_document(
            r#"<html><head>
                <meta property="product:price:amount" content="89.50">
            </head><body></body></html>"#,
        );
        assert_eq!(extract_price(&document), Some(Decimal::new(8950, 2)));
    }

    #[test]
    fn extract_price_none_without_selectors() {
        let document = Html::parse_document("<html><body><p>Hello</p></body></html>");
        assert_eq!(extract_price(&document), None);
    }
}
