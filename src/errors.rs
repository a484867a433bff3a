//! Error handling for the application

use thiserror::Error;

/// Swap-core errors, returned as explicit result values everywhere.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    #[error("no pool found for pair {sell}/{buy}")]
    PoolNotFound { sell: String, buy: String },

    #[error("unknown asset symbol: {0}")]
    UnknownSymbol(String),

    #[error("invalid pool data: {0}")]
    InvalidPoolData(String),

    #[error("response error: {0}")]
    Response(String),

    #[error("transaction {txid} not confirmed after {waited}s")]
    ConfirmTimeout { txid: String, waited: u64 },

    #[error("poll cancelled for transaction {txid}")]
    Cancelled { txid: String },
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        SwapError::Response(err.to_string())
    }
}
