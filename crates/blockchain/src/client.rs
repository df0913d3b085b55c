use anyhow::Context;
use reqwest::Client;
use serde_json::{json, Value};
use shared::{Error, Result};
use std::time::Duration;
use tracing::{debug, warn};

use crate::types::{token_display_amount, TokenHolding};

/// SPL token program id, used to enumerate a wallet's token accounts.
const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Solana JSON-RPC client for wallet balance queries
pub struct SolanaRpcClient {
    client: Client,
    rpc_url: String,
}

impl SolanaRpcClient {
    /// Create a new client against the given RPC endpoint
    pub fn new(rpc_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, rpc_url }
    }

    /// Get the SOL balance for a wallet address, in lamports.
    ///
    /// A response without a numeric `result.value` is treated as a zero
    /// balance.
    pub async fn get_sol_balance(&self, address: &str) -> Result<u64> {
        debug!("Fetching SOL balance for address: {}", address);

        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [address]
        });

        let response = self.rpc_request(&request_body).await?;
        let lamports = lamports_from_response(&response);

        debug!("Retrieved SOL balance: {} lamports", lamports);
        Ok(lamports)
    }

    /// Get all SPL token accounts for a wallet address.
    ///
    /// An empty list is a normal outcome (the wallet holds no tokens), not
    /// an error. Records that cannot be parsed are skipped.
    pub async fn get_token_accounts(&self, address: &str) -> Result<Vec<TokenHolding>> {
        debug!("Fetching token accounts for address: {}", address);

        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTokenAccountsByOwner",
            "params": [
                address,
                { "programId": TOKEN_PROGRAM_ID },
                { "encoding": "jsonParsed" }
            ]
        });

        let response = self.rpc_request(&request_body).await?;

        let accounts = response
            .get("result")
            .and_then(|r| r.get("value"))
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        let mut holdings = Vec::new();
        for account in &accounts {
            match parse_token_account(account) {
                Ok(holding) => holdings.push(holding),
                Err(e) => {
                    warn!("Failed to parse token account: {}", e);
                    continue;
                }
            }
        }

        debug!("Retrieved {} token accounts", holdings.len());
        Ok(holdings)
    }

    /// Send one JSON-RPC request and return the parsed response body
    async fn rpc_request(&self, request_body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(&self.rpc_url)
            .json(request_body)
            .send()
            .await
            .map_err(|e| {
                warn!("Solana RPC request failed: {}", e);
                Error::SolanaRpc(format!("RPC request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Solana RPC returned error status {}: {}", status, error_text);
            return Err(Error::SolanaRpc(format!(
                "RPC error {}: {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse RPC response: {}", e);
            Error::SolanaRpc(format!("Failed to parse RPC response: {}", e))
        })
    }
}

/// Extract the lamport balance from a `getBalance` response, defaulting to
/// zero when the field is absent or malformed.
fn lamports_from_response(response: &Value) -> u64 {
    response
        .get("result")
        .and_then(|r| r.get("value"))
        .and_then(|v| v.as_u64())
        .unwrap_or(0)
}

/// Parse one `jsonParsed` token account record into a holding
fn parse_token_account(account: &Value) -> anyhow::Result<TokenHolding> {
    let info = account
        .get("account")
        .and_then(|a| a.get("data"))
        .and_then(|d| d.get("parsed"))
        .and_then(|p| p.get("info"))
        .ok_or_else(|| anyhow::anyhow!("Missing parsed account info"))?;

    let mint = info
        .get("mint")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing mint field"))?
        .to_string();

    let token_amount = info
        .get("tokenAmount")
        .ok_or_else(|| anyhow::anyhow!("Missing tokenAmount field"))?;

    let amount_str = token_amount
        .get("amount")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing amount field"))?;

    let raw_amount = amount_str
        .parse::<u64>()
        .context("Failed to parse amount")?;

    let decimals = token_amount
        .get("decimals")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| anyhow::anyhow!("Missing decimals field"))? as u8;

    let state = info
        .get("state")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(TokenHolding {
        mint,
        raw_amount,
        decimals,
        display_amount: token_display_amount(raw_amount, decimals),
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account(state: Option<&str>) -> Value {
        let mut info = json!({
            "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "tokenAmount": {
                "amount": "1500000",
                "decimals": 6,
                "uiAmount": 1.5,
                "uiAmountString": "1.5"
            }
        });
        if let Some(state) = state {
            info["state"] = json!(state);
        }
        json!({
            "pubkey": "9yQ5P7wSTSdfZRVJvEPsApw2CpUhpqpQ1pF1pJpVxhNq",
            "account": {
                "data": {
                    "parsed": { "info": info, "type": "account" },
                    "program": "spl-token"
                }
            }
        })
    }

    #[test]
    fn test_parse_token_account() {
        let holding = parse_token_account(&sample_account(Some("initialized"))).unwrap();

        assert_eq!(holding.mint, "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
        assert_eq!(holding.raw_amount, 1_500_000);
        assert_eq!(holding.decimals, 6);
        assert_eq!(holding.display_amount, 1.5);
        assert_eq!(holding.state, "initialized");
    }

    #[test]
    fn test_parse_token_account_missing_state_defaults_to_unknown() {
        let holding = parse_token_account(&sample_account(None)).unwrap();
        assert_eq!(holding.state, "unknown");
    }

    #[test]
    fn test_parse_token_account_missing_mint_fails() {
        let mut account = sample_account(Some("initialized"));
        account["account"]["data"]["parsed"]["info"]
            .as_object_mut()
            .unwrap()
            .remove("mint");

        let result = parse_token_account(&account);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_token_account_non_numeric_amount_fails() {
        let mut account = sample_account(Some("initialized"));
        account["account"]["data"]["parsed"]["info"]["tokenAmount"]["amount"] =
            json!("not_a_number");

        let result = parse_token_account(&account);
        assert!(result.is_err());
    }

    #[test]
    fn test_lamports_from_response() {
        let response = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "context": { "slot": 1 }, "value": 1_500_000_000u64 }
        });
        assert_eq!(lamports_from_response(&response), 1_500_000_000);
    }

    #[test]
    fn test_lamports_from_response_missing_value_defaults_to_zero() {
        assert_eq!(lamports_from_response(&json!({ "jsonrpc": "2.0", "id": 1 })), 0);
        assert_eq!(
            lamports_from_response(&json!({ "result": { "value": "oops" } })),
            0
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Nothing listens on this port; the request must fail, not default.
        let client = SolanaRpcClient::new("http://127.0.0.1:9".to_string());

        let result = client.get_sol_balance("11111111111111111111111111111111").await;
        assert!(matches!(result, Err(Error::SolanaRpc(_))));

        let result = client.get_token_accounts("11111111111111111111111111111111").await;
        assert!(matches!(result, Err(Error::SolanaRpc(_))));
    }
}
