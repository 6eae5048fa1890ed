use anyhow::Result;
use tracing::debug;

use crate::api::{BotConfig, FreqtradeClient};

/// Static hint printed after a successful check, pointing at the log grep
/// that reveals the exchange connection URL.
pub const LOG_HINT: [&str; 2] = [
    "To check the actual connection URL, look at the bot logs:",
    "docker logs freqtrade | grep -i \"hyperliquid.*url\\|connecting to\\|testnet\"",
];

/// Endpoints swept by [`probe_endpoints`], with a description for each.
const PROBE_ENDPOINTS: [(&str, &str); 5] = [
    ("ping", "Testing basic connectivity"),
    ("version", "Getting bot version"),
    ("status", "Getting bot status"),
    ("show_config", "Getting bot configuration"),
    ("balance", "Getting account balance"),
];

/// Query `/show_config` and `/ping` in order, printing the interesting fields
/// as they arrive.
///
/// Any failure (network, auth, decode) is printed and yields `None`; a
/// failure on the first call prevents the second from running.
pub async fn check_status(client: &FreqtradeClient) -> Option<BotConfig> {
    println!("Checking exchange status...");

    match run_checks(client).await {
        Ok(config) => Some(config),
        Err(e) => {
            println!("Error: {:#}", e);
            None
        }
    }
}

async fn run_checks(client: &FreqtradeClient) -> Result<BotConfig> {
    let config = client.show_config().await?;

    for line in config_report(&config) {
        println!("{}", line);
    }

    println!("\nGetting ping response to check logs...");
    let (status, body) = client.ping().await?;
    println!("Ping status: {}", status.as_u16());
    println!("Ping response: {}", body);

    Ok(config)
}

/// The four configuration report lines. A key the API never sent renders as
/// an empty string, not a made-up value.
fn config_report(config: &BotConfig) -> [String; 4] {
    let dry_run = match config.dry_run {
        Some(v) => v.to_string(),
        None => String::new(),
    };

    [
        format!("Exchange: {}", config.exchange),
        format!("Trading mode: {}", config.trading_mode),
        format!("Stake currency: {}", config.stake_currency),
        format!("Dry run: {}", dry_run),
    ]
}

/// Hint lines to print for a check result: the log-inspection hint for a
/// non-empty result, nothing otherwise.
pub fn log_hint_for(config: Option<&BotConfig>) -> &'static [&'static str] {
    match config {
        Some(_) => &LOG_HINT,
        None => &[],
    }
}

/// Print the log-inspection hint when the check produced a non-empty result.
pub fn print_log_hint(config: Option<&BotConfig>) {
    let lines = log_hint_for(config);
    if lines.is_empty() {
        return;
    }

    println!();
    for line in lines {
        println!("{}", line);
    }
}

/// Best-effort sweep over the diagnostic endpoints: each one is fetched and
/// printed independently, and a failure never stops the sweep.
pub async fn probe_endpoints(client: &FreqtradeClient) {
    for (endpoint, description) in PROBE_ENDPOINTS {
        println!("\n{}...", description);

        match client.get_endpoint(endpoint).await {
            Ok((status, body)) => {
                println!("{} -> {}", endpoint, status.as_u16());
                println!("{}", body);
            }
            Err(e) => {
                debug!("Probe of {} failed", endpoint);
                println!("{} failed: {:#}", endpoint, e);
            }
        }
    }
}
