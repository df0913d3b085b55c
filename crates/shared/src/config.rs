use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub solana: SolanaConfig,
    pub moralis: MoralisConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolanaConfig {
    pub rpc_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoralisConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Input file with one wallet address per line
    pub wallets_file: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            solana: SolanaConfig {
                rpc_url: env::var("SOLANA_RPC_URL")
                    .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string()),
            },
            moralis: MoralisConfig {
                // A missing key is not validated here; metadata requests
                // fail remotely and are handled per token.
                api_key: env::var("MORALIS_API_KEY").unwrap_or_default(),
            },
            report: ReportConfig {
                wallets_file: env::var("WALLETS_FILE")
                    .unwrap_or_else(|_| "wallets.txt".to_string()),
            },
        })
    }
}
