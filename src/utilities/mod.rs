pub mod fetch_page;
pub mod politeness_pause;

pub use fetch_page::{FetchPage, HttpFetcher};
pub use politeness_pause::politeness_pause;
