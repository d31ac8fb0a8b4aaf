use std::str::FromStr;

use rust_decimal::Decimal;

const REMOVE_SYMBOLS: [char; 3] = ['₹', '$', ','];

/// Strips currency symbols and thousands separators, then parses an exact decimal.
pub fn clean_price(price_text: &str) -> Option<Decimal> {
    let cleaned: String = price_text
        .chars()
        .filter(|c| !REMOVE_SYMBOLS.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    // "1,299." is a complete amount on some storefronts
    let cleaned = cleaned.strip_suffix('.').unwrap_or(cleaned);

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_price_rupee_with_separators_works() {
        assert_eq!(clean_price("₹1,29,999"), Some(Decimal::new(129999, 0)));
    }

    #[test]
    fn clean_price_dollar_with_cents_works() {
        assert_eq!(clean_price(" $1,234.50 "), Some(Decimal::new(123450, 2)));
    }

    #[test]
    fn clean_price_trailing_point_works() {
        assert_eq!(clean_price("1,299."), Some(Decimal::new(1299, 0)));
    }

    #[test]
    fn clean_price_zero_is_a_price() {
        assert_eq!(clean_price("₹0"), Some(Decimal::ZERO));
    }

    #[test]
    fn clean_price_fails_on_words() {
        assert_eq!(clean_price("Currently unavailable"), None);
    }

    #[test]
    fn clean_price_fails_on_symbol_only() {
        assert_eq!(clean_price("₹ "), None);
    }
}
