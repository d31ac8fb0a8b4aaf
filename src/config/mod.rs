pub mod load_config;
pub mod tracker_config;

pub use load_config::load_config;
pub use tracker_config::{EmailConfig, ProductConfig, TrackerConfig};
