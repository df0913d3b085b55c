use anyhow::Context;
use blockchain::types::{TokenHolding, WalletBalance};
use blockchain::SolanaRpcClient;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::moralis_client::{MoralisClient, TokenMetadata};

/// Read newline-delimited wallet addresses from the input file.
///
/// Lines are trimmed of surrounding whitespace and blank lines are skipped;
/// order is preserved and duplicates are kept.
pub fn read_wallets(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wallets file: {}", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Format the report line for one token holding
pub fn format_token_line(metadata: &TokenMetadata, holding: &TokenHolding) -> String {
    format!(
        "{} ({}) | Mint: {} | Balance: {} | State: {} | Logo: {}",
        metadata.name,
        metadata.symbol,
        holding.mint,
        holding.display_amount,
        holding.state,
        metadata.logo
    )
}

/// Run the report for every wallet, in file order, printing to stdout.
///
/// A wallet whose balance or token-list query fails gets one error line and
/// is skipped; the remaining wallets still run. The process itself never
/// fails here.
pub async fn run_report(rpc: &SolanaRpcClient, moralis: &MoralisClient, wallets: &[String]) {
    info!("Reporting on {} wallets", wallets.len());

    for wallet in wallets {
        println!();
        println!("=== Wallet: {} ===", wallet);

        if let Err(e) = process_wallet(rpc, moralis, wallet).await {
            println!("Error processing wallet {}: {}", wallet, e);
        }
    }
}

/// Report on a single wallet: SOL balance, then each token holding.
///
/// Metadata failures are downgraded to placeholder values per token;
/// balance and token-list failures propagate to the caller.
async fn process_wallet(
    rpc: &SolanaRpcClient,
    moralis: &MoralisClient,
    wallet: &str,
) -> shared::Result<()> {
    let lamports = rpc.get_sol_balance(wallet).await?;
    let balance = WalletBalance::from_lamports(wallet.to_string(), lamports);
    println!("SOL balance: {} SOL", balance.sol);

    let holdings = rpc.get_token_accounts(wallet).await?;
    if holdings.is_empty() {
        println!("No tokens in wallet");
        return Ok(());
    }

    for holding in &holdings {
        let metadata = match moralis.get_token_metadata(&holding.mint).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Metadata lookup failed for mint {}: {}", holding.mint, e);
                TokenMetadata::default()
            }
        };

        println!("{}", format_token_line(&metadata, holding));
    }

    Ok(())
}
