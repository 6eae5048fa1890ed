use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ftcheck::{
    checker::{self, print_log_hint},
    config::ApiSettings,
    FreqtradeClient,
};

#[derive(Parser, Debug)]
#[command(name = "ftcheck")]
#[command(about = "Diagnostic status checker for a running Freqtrade bot's REST API")]
struct Args {
    /// API base URL (overrides the FREQTRADE_API_URL environment variable)
    #[arg(long)]
    url: Option<String>,

    /// Sweep the remaining diagnostic endpoints after the status check
    #[arg(long)]
    probe: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ftcheck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Errors are reported on stdout and never raised to the exit status.
    let settings = match &args.url {
        Some(url) => ApiSettings::with_base_url(url.clone()),
        None => ApiSettings::from_env(),
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            println!("Error: {:#}", e);
            return;
        }
    };

    info!("Using API base URL: {}", settings.base_url);

    let client = match FreqtradeClient::new(settings) {
        Ok(client) => client,
        Err(e) => {
            println!("Error: {:#}", e);
            return;
        }
    };

    let config = checker::check_status(&client).await;

    if config.is_none() {
        debug!("Status check produced no result, skipping log hint");
    }
    print_log_hint(config.as_ref());

    if args.probe {
        checker::probe_endpoints(&client).await;
    }
}
