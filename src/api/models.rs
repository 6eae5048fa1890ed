use serde::Deserialize;

/// Subset of the `/show_config` response consumed for display.
///
/// The API returns many more keys; anything missing deserializes to its
/// default so the report can still render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub trading_mode: String,
    #[serde(default)]
    pub stake_currency: String,
    /// `None` when the key is absent, so the report can render it as an
    /// empty string instead of claiming live trading.
    #[serde(default)]
    pub dry_run: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let config: BotConfig = serde_json::from_str(r#"{"exchange": "hyperliquid"}"#).unwrap();
        assert_eq!(config.exchange, "hyperliquid");
        assert_eq!(config.trading_mode, "");
        assert_eq!(config.stake_currency, "");
        assert_eq!(config.dry_run, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: BotConfig = serde_json::from_str(
            r#"{
                "exchange": "hyperliquid",
                "trading_mode": "spot",
                "stake_currency": "USDC",
                "dry_run": true,
                "max_open_trades": 5,
                "strategy": "SampleStrategy"
            }"#,
        )
        .unwrap();
        assert_eq!(config.trading_mode, "spot");
        assert_eq!(config.stake_currency, "USDC");
        assert_eq!(config.dry_run, Some(true));
    }
}
