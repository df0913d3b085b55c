pub mod client;
pub mod types;

pub use client::SolanaRpcClient;
pub use types::*;
