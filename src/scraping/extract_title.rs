use std::sync::LazyLock;

use scraper::{Html, Selector};

pub const TITLE_PLACEHOLDER: &str = "Unknown Product";
pub const TITLE_MAX_CHARS: usize = 100;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Text of the first `<title>`, cut to 100 characters.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE)
        .next()
        .map(|element| {
            element
                .text()
                .collect::<String>()
                .trim()
                .chars()
                .take(TITLE_MAX_CHARS)
                .collect()
        })
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_title_trims_text() {
        let document = Html::parse_document("<html><head><title>\n  Noise Cancelling Headphones \n</title></head></html>");
        assert_eq!(extract_title(&document), "Noise Cancelling Headphones");
    }

    #[test]
    fn extract_title_truncates_to_100_chars() {
        let long = "é".repeat(150);
        let document = Html::parse_document(&format!("<title>{}</title>", long));
        let title = extract_title(&document);

        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn extract_title_falls_back_to_placeholder() {
        let document = Html::parse_document("<html><body><p>No head here</p></body></html>");
        assert_eq!(extract_title(&document), TITLE_PLACEHOLDER);
    }
}
