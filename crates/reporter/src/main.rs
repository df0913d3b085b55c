use anyhow::Result;
use blockchain::SolanaRpcClient;
use reporter::{report, MoralisClient};
use shared::config::Config;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging; the report itself goes to stdout, diagnostics to
    // stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize Solana RPC client
    let rpc_client = SolanaRpcClient::new(config.solana.rpc_url.clone());
    tracing::info!("Solana RPC client initialized for {}", config.solana.rpc_url);

    // Initialize Moralis client for token metadata
    let moralis_client = MoralisClient::new(config.moralis.api_key.clone());
    tracing::info!("Moralis client initialized");

    // Read the wallet list before any network activity begins; a missing or
    // unreadable file terminates the run.
    let wallets = report::read_wallets(Path::new(&config.report.wallets_file))?;
    tracing::info!("Loaded {} wallet addresses", wallets.len());

    report::run_report(&rpc_client, &moralis_client, &wallets).await;

    Ok(())
}
