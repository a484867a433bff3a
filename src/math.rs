//! Constant-product rate and price-impact math
//!
//! Pure computation over a pool snapshot. All arithmetic is decimal, never
//! floating point, since the inputs are base-unit integer amounts.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::SwapError;
use crate::pool::PoolMatch;

/// Derived outputs of one rate computation.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    /// Effective execution rate, buy units per sell unit. Distinct from the
    /// spot price because it includes the trade's own slippage.
    pub rate: Decimal,
    /// Unsigned relative price movement caused by the trade.
    pub price_impact: Decimal,
    /// Output amount in integer base units (truncated, never rounded up).
    pub buy_amount: Decimal,
    /// Pool fee on the output, in integer base units (truncated).
    pub buy_asset_trade_fee: Decimal,
}

fn parse_amount(raw: &str, what: &str) -> Result<Decimal, SwapError> {
    Decimal::from_str(raw)
        .map_err(|e| SwapError::InvalidPoolData(format!("bad {} '{}': {}", what, raw, e)))
}

/// Compute rate, price impact, output amount, and trade fee for selling
/// `sell_amount` base units into the matched pool.
///
/// A sell amount of `0` is remapped to `1` before computing, so a zero-amount
/// request quotes the rate for a notional minimum unit instead of collapsing
/// the price-impact math. Callers get that substitution as observable
/// behavior.
pub fn rate_quote(matched: &PoolMatch, sell_amount: u64) -> Result<RateQuote, SwapError> {
    let pool = &matched.pool;
    if pool.pool_assets.len() != 2 {
        return Err(SwapError::InvalidPoolData(format!(
            "pool {} holds {} assets, expected 2",
            pool.id,
            pool.pool_assets.len()
        )));
    }

    let reserve0 = parse_amount(&pool.pool_assets[0].token.amount, "reserve amount")?;
    let reserve1 = parse_amount(&pool.pool_assets[1].token.amount, "reserve amount")?;
    let swap_fee = parse_amount(&pool.pool_params.swap_fee, "swap fee")?;
    if reserve0 <= Decimal::ZERO || reserve1 <= Decimal::ZERO {
        return Err(SwapError::InvalidPoolData(format!(
            "pool {} has a non-positive reserve",
            pool.id
        )));
    }

    let sell_amount = if sell_amount == 0 {
        Decimal::ONE
    } else {
        Decimal::from(sell_amount)
    };

    let sell_reserve = if matched.sell_asset_index == 0 { reserve0 } else { reserve1 };
    let buy_reserve = if matched.buy_asset_index == 0 { reserve0 } else { reserve1 };

    // Every step is checked: amounts near the decimal range limit must come
    // back as invalid pool data, not a panic.
    let overflow =
        || SwapError::InvalidPoolData(format!("pool {} amounts overflow decimal range", pool.id));

    // Invariant from the pool's declared ordering; multiplication commutes so
    // the normalization does not matter here.
    let k = reserve0.checked_mul(reserve1).ok_or_else(overflow)?;

    let initial_price = sell_reserve.checked_div(buy_reserve).ok_or_else(overflow)?;
    let sell_reserve_after = sell_reserve.checked_add(sell_amount).ok_or_else(overflow)?;
    let buy_reserve_after = k.checked_div(sell_reserve_after).ok_or_else(overflow)?;
    let final_price = sell_reserve_after
        .checked_div(buy_reserve_after)
        .ok_or_else(overflow)?;

    let buy_amount = buy_reserve
        .checked_sub(buy_reserve_after)
        .ok_or_else(overflow)?
        .trunc();
    let rate = buy_amount.checked_div(sell_amount).ok_or_else(overflow)?;
    let price_impact = Decimal::ONE
        .checked_sub(initial_price.checked_div(final_price).ok_or_else(overflow)?)
        .ok_or_else(overflow)?
        .abs();
    let buy_asset_trade_fee = buy_amount.checked_mul(swap_fee).ok_or_else(overflow)?.trunc();

    Ok(RateQuote {
        rate,
        price_impact,
        buy_amount,
        buy_asset_trade_fee,
    })
}
