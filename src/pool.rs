//! Pool lookup with order normalization

use tracing::debug;

use crate::errors::SwapError;
use crate::lcd::types::Pool;
use crate::lcd::PoolSource;

/// A matched pool plus which reserve index holds the sell asset and which the
/// buy asset. The listing does not guarantee reserve ordering matches the
/// request, so the indices carry the normalization.
#[derive(Debug, Clone)]
pub struct PoolMatch {
    pub pool: Pool,
    pub sell_asset_index: usize,
    pub buy_asset_index: usize,
}

/// Find the first pool whose two reserve denominations match the requested
/// pair in either order. Pools that do not hold exactly two assets are
/// skipped.
pub fn match_pool(
    pools: &[Pool],
    sell_denom: &str,
    buy_denom: &str,
) -> Result<PoolMatch, SwapError> {
    for pool in pools {
        if pool.pool_assets.len() != 2 {
            continue;
        }
        let denom0 = pool.pool_assets[0].token.denom.as_str();
        let denom1 = pool.pool_assets[1].token.denom.as_str();
        let (sell_asset_index, buy_asset_index) = if denom0 == sell_denom && denom1 == buy_denom {
            (0, 1)
        } else if denom0 == buy_denom && denom1 == sell_denom {
            (1, 0)
        } else {
            continue;
        };
        debug!(
            "matched pool {} for {}/{} (sell index {})",
            pool.id, sell_denom, buy_denom, sell_asset_index
        );
        return Ok(PoolMatch {
            pool: pool.clone(),
            sell_asset_index,
            buy_asset_index,
        });
    }
    Err(SwapError::PoolNotFound {
        sell: sell_denom.to_string(),
        buy: buy_denom.to_string(),
    })
}

/// Fetch the listing and match in one step.
pub async fn find_pool<S: PoolSource>(
    source: &S,
    sell_denom: &str,
    buy_denom: &str,
) -> Result<PoolMatch, SwapError> {
    let pools = source.fetch_pools().await?;
    match_pool(&pools, sell_denom, buy_denom)
}
