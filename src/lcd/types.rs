//! Serde types for the Osmosis LCD payloads we consume

use serde::Deserialize;

/// Response from the gamm pools listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolsResponse {
    pub pools: Vec<Pool>,
}

/// A gamm constant-product pool. Only the fields the rate engine needs.
#[derive(Debug, Clone, Deserialize)]
pub struct Pool {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "poolParams")]
    pub pool_params: PoolParams,
    #[serde(rename = "poolAssets")]
    pub pool_assets: Vec<PoolAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolParams {
    #[serde(rename = "swapFee")]
    pub swap_fee: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolAsset {
    pub token: Coin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Response from the legacy txs endpoint. `codespace` present means the
/// transaction errored on-chain; `gas_used` present without a codespace means
/// it confirmed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TxResponse {
    pub txhash: Option<String>,
    pub codespace: Option<String>,
    pub gas_used: Option<String>,
}

/// Response from the latest-block endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockResponse {
    pub block: Block,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    pub height: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pool_listing() {
        let raw = r#"{
            "pools": [{
                "id": "1",
                "poolParams": { "swapFee": "0.002000000000000000" },
                "poolAssets": [
                    { "token": { "denom": "uosmo", "amount": "1000000" } },
                    { "token": { "denom": "uatom", "amount": "500000" } }
                ]
            }]
        }"#;
        let parsed: PoolsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.pools.len(), 1);
        assert_eq!(parsed.pools[0].pool_assets[0].token.denom, "uosmo");
        assert_eq!(parsed.pools[0].pool_params.swap_fee, "0.002000000000000000");
    }

    #[test]
    fn parses_tx_response_without_codespace() {
        let raw = r#"{ "txhash": "ABC123", "gas_used": "83214" }"#;
        let parsed: TxResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.codespace.is_none());
        assert_eq!(parsed.gas_used.as_deref(), Some("83214"));
    }

    #[test]
    fn parses_latest_block() {
        let raw = r#"{ "block": { "header": { "height": "4837261" } } }"#;
        let parsed: BlockResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.block.header.height, "4837261");
    }
}
