//! Osmoquote - Osmosis AMM quote engine and transaction confirmation poller

pub mod app;
pub mod assets;
pub mod config;
pub mod errors;
pub mod lcd;
pub mod math;
pub mod pool;
pub mod poller;
pub mod transfer;

// Re-export main types for convenience
pub use assets::AssetRegistry;
pub use errors::SwapError;
pub use lcd::LcdClient;
pub use math::{rate_quote, RateQuote};
pub use pool::{find_pool, PoolMatch};
pub use poller::{TxConfirmation, TxPoller};
