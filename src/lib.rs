pub mod check_products;
pub mod config;
pub mod history;
pub mod notify;
pub mod scraping;
pub mod utilities;

pub use check_products::{CheckOutcome, CycleSummary, PriceTracker};
