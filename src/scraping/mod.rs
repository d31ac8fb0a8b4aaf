pub mod clean_price;
pub mod extract_data;
pub mod extract_price;
pub mod extract_price_from_text;
pub mod extract_title;

pub use extract_data::{extract_data, PageData};
