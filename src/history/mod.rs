pub mod append_record;
pub mod price_record;
pub mod read_history;

pub use append_record::append_record;
pub use price_record::PriceRecord;
pub use read_history::read_history;
