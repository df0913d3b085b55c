use reqwest::Client;
use serde::Deserialize;
use shared::{Error, Result};
use std::time::Duration;
use tracing::{debug, warn};

const MORALIS_API_BASE: &str = "https://solana-gateway.moralis.io";

/// Display metadata for a token mint.
///
/// Each field falls back to its placeholder independently when the Moralis
/// response omits it; `default()` is the full placeholder set used when the
/// lookup fails outright.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub logo: String,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            symbol: "???".to_string(),
            logo: "No logo".to_string(),
        }
    }
}

/// Moralis token metadata response structure
#[derive(Debug, Deserialize)]
struct MoralisMetadataResponse {
    name: Option<String>,
    symbol: Option<String>,
    logo: Option<String>,
}

impl From<MoralisMetadataResponse> for TokenMetadata {
    fn from(response: MoralisMetadataResponse) -> Self {
        let placeholder = TokenMetadata::default();
        TokenMetadata {
            name: response.name.unwrap_or(placeholder.name),
            symbol: response.symbol.unwrap_or(placeholder.symbol),
            logo: response.logo.unwrap_or(placeholder.logo),
        }
    }
}

/// Moralis Solana gateway client for token metadata lookups
pub struct MoralisClient {
    client: Client,
    api_key: String,
}

impl MoralisClient {
    /// Create a new client.
    ///
    /// The key is not validated here; an empty or wrong key makes the
    /// gateway reject each request, which callers handle per token.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }

    /// Fetch display metadata for a token mint from the Moralis gateway
    pub async fn get_token_metadata(&self, mint: &str) -> Result<TokenMetadata> {
        let url = format!("{}/token/mainnet/{}/metadata", MORALIS_API_BASE, mint);
        debug!("Fetching token metadata for mint: {}", mint);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X-API-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Moralis request failed for mint {}: {}", mint, e);
                Error::ExternalService(format!("Moralis request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Moralis returned error status {}: {}", status, error_text);
            return Err(Error::ExternalService(format!(
                "Moralis error {}: {}",
                status, error_text
            )));
        }

        let metadata: MoralisMetadataResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Moralis response for mint {}: {}", mint, e);
            Error::ExternalService(format!("Failed to parse Moralis response: {}", e))
        })?;

        Ok(metadata.into())
    }
}
