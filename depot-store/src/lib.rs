pub mod app_config;
pub mod warehouse;

pub use app_config::Config;
pub use warehouse::{SeedError, SeedSummary, Warehouse};
