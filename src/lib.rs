pub mod api;
pub mod checker;
pub mod config;

pub use api::{BotConfig, FreqtradeClient};
pub use config::ApiSettings;
