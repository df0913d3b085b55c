use serde::{Deserialize, Serialize};

/// Lamports per SOL; the native balance divisor.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Represents the SOL balance of a wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub address: String,
    pub lamports: u64,
    pub sol: f64,
}

impl WalletBalance {
    pub fn from_lamports(address: String, lamports: u64) -> Self {
        Self {
            address,
            lamports,
            sol: lamports_to_sol(lamports),
        }
    }
}

/// Represents a token account with balance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenHolding {
    pub mint: String,
    pub raw_amount: u64,
    pub decimals: u8,
    pub display_amount: f64,
    pub state: String,
}

/// Convert a raw lamport balance to SOL display units
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Convert a raw token amount to display units.
///
/// A zero-decimals amount is passed through unchanged instead of being
/// divided by 10^0.
pub fn token_display_amount(raw_amount: u64, decimals: u8) -> f64 {
    if decimals == 0 {
        raw_amount as f64
    } else {
        raw_amount as f64 / 10f64.powi(decimals as i32)
    }
}
