mod client;
mod models;

pub use client::FreqtradeClient;
pub use models::BotConfig;
