pub mod moralis_client;
pub mod report;

pub use moralis_client::{MoralisClient, TokenMetadata};
