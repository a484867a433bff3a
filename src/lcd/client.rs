//! HTTP client for the Osmosis LCD

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::SwapError;
use super::types::{BlockResponse, Pool, PoolsResponse, TxResponse};
use super::{BlockSource, PoolSource, TxStatus, TxStatusSource};

/// Page size for the pools listing. The LCD caps pagination at 1000 entries.
const POOLS_PAGE_LIMIT: u32 = 1000;

/// Thin reqwest wrapper over the three LCD endpoints the core uses. No retry
/// logic at this layer; failures propagate as response errors.
pub struct LcdClient {
    http_client: Client,
    base_url: String,
}

impl LcdClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, SwapError> {
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SwapError::Response(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PoolSource for LcdClient {
    async fn fetch_pools(&self) -> Result<Vec<Pool>, SwapError> {
        let url = format!(
            "{}/lcd/osmosis/gamm/v1beta1/pools?pagination.limit={}",
            self.base_url, POOLS_PAGE_LIMIT
        );
        let listing: PoolsResponse = self.get_json(&url).await?;
        debug!("fetched {} pools", listing.pools.len());
        Ok(listing.pools)
    }
}

#[async_trait]
impl TxStatusSource for LcdClient {
    async fn tx_status(&self, txid: &str) -> TxStatus {
        let url = format!("{}/lcd/txs/{}", self.base_url, txid);
        match self.get_json::<TxResponse>(&url).await {
            Ok(tx) => tx_status_from_response(&tx),
            Err(e) => {
                // Transient network failures read as not-found so the poll
                // keeps going instead of aborting.
                warn!("status check for {} failed: {}", txid, e);
                TxStatus::NotFound
            }
        }
    }
}

#[async_trait]
impl BlockSource for LcdClient {
    async fn latest_block_height(&self) -> Result<u64, SwapError> {
        let url = format!("{}/lcd/blocks/latest", self.base_url);
        let block: BlockResponse = self.get_json(&url).await?;
        block
            .block
            .header
            .height
            .parse::<u64>()
            .map_err(|e| SwapError::Response(format!("bad block height: {}", e)))
    }
}

/// Collapse a raw tx response into the three poller-visible cases. A
/// codespace means on-chain failure even when gas_used is also reported.
pub fn tx_status_from_response(tx: &TxResponse) -> TxStatus {
    if let Some(codespace) = tx.codespace.as_ref().filter(|c| !c.is_empty()) {
        return TxStatus::Failed {
            codespace: codespace.clone(),
        };
    }
    match &tx.gas_used {
        Some(gas_used) => TxStatus::Success {
            gas_used: gas_used.clone(),
        },
        None => TxStatus::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_used_without_codespace_is_success() {
        let tx = TxResponse {
            txhash: Some("ABC".to_string()),
            codespace: None,
            gas_used: Some("91000".to_string()),
        };
        assert_eq!(
            tx_status_from_response(&tx),
            TxStatus::Success {
                gas_used: "91000".to_string()
            }
        );
    }

    #[test]
    fn codespace_wins_over_gas_used() {
        let tx = TxResponse {
            txhash: Some("ABC".to_string()),
            codespace: Some("sdk".to_string()),
            gas_used: Some("91000".to_string()),
        };
        assert_eq!(
            tx_status_from_response(&tx),
            TxStatus::Failed {
                codespace: "sdk".to_string()
            }
        );
    }

    #[test]
    fn empty_response_is_not_found() {
        assert_eq!(tx_status_from_response(&TxResponse::default()), TxStatus::NotFound);
    }

    #[test]
    fn empty_codespace_string_is_not_a_failure() {
        let tx = TxResponse {
            txhash: None,
            codespace: Some(String::new()),
            gas_used: Some("120".to_string()),
        };
        assert_eq!(
            tx_status_from_response(&tx),
            TxStatus::Success {
                gas_used: "120".to_string()
            }
        );
    }
}
