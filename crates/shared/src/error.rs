use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Solana RPC error: {0}")]
    SolanaRpc(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

pub type Result<T> = std::result::Result<T, Error>;
