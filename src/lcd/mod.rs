//! Osmosis LCD endpoint access

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::errors::SwapError;
use self::types::Pool;

pub use self::client::LcdClient;

/// Status of a transaction as read from the LCD, after collapsing the raw
/// response into the three cases the poller distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    /// Confirmed: gas_used present and no error codespace.
    Success { gas_used: String },
    /// On-chain failure: an error codespace was reported.
    Failed { codespace: String },
    /// Anything else, including network errors (assumed transient).
    NotFound,
}

/// Source of the full pool listing.
#[async_trait]
pub trait PoolSource {
    async fn fetch_pools(&self) -> Result<Vec<Pool>, SwapError>;
}

/// Source of transaction status reads. Implementations must degrade network
/// errors to `TxStatus::NotFound` rather than failing the poll.
#[async_trait]
pub trait TxStatusSource {
    async fn tx_status(&self, txid: &str) -> TxStatus;
}

/// Source of the latest block height.
#[async_trait]
pub trait BlockSource {
    async fn latest_block_height(&self) -> Result<u64, SwapError>;
}
