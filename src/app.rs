// src/app.rs
use anyhow::Result;
use tracing::info;

use crate::assets::AssetRegistry;
use crate::config::Config;
use crate::lcd::LcdClient;
use crate::math;
use crate::pool;
use crate::poller::TxPoller;
use crate::transfer;

fn registry(cfg: &Config) -> AssetRegistry {
    if cfg.assets.is_empty() {
        AssetRegistry::default()
    } else {
        AssetRegistry::new(&cfg.assets)
    }
}

/// Quote a swap: resolve symbols, match a pool, run the rate math.
pub async fn run_quote(cfg: Config, sell: &str, buy: &str, amount: u64) -> Result<()> {
    let assets = registry(&cfg);
    let sell_denom = assets.denom(sell)?.to_string();
    let buy_denom = assets.denom(buy)?.to_string();

    let client = LcdClient::new(cfg.lcd.base_url.clone());
    let matched = pool::find_pool(&client, &sell_denom, &buy_denom).await?;
    info!("using pool {} for {}/{}", matched.pool.id, sell, buy);

    let quote = math::rate_quote(&matched, amount)?;
    println!("pool:          {}", matched.pool.id);
    println!("rate:          {} {} per {}", quote.rate, buy, sell);
    println!("buy amount:    {} {}", quote.buy_amount, buy_denom);
    println!("price impact:  {}", quote.price_impact);
    println!("trade fee:     {} {}", quote.buy_asset_trade_fee, buy_denom);
    Ok(())
}

/// Watch a transaction until it confirms, times out, or Ctrl-C cancels.
pub async fn run_watch_tx(cfg: Config, txid: &str) -> Result<()> {
    let client = LcdClient::new(cfg.lcd.base_url.clone());
    let poller = TxPoller::with_config(client, cfg.poller_config());

    let (handle, token) = crate::poller::cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    let confirmation = poller.wait_with_cancel(txid, token).await?;
    println!("confirmed:     {}", confirmation.txid);
    println!("gas used:      {}", confirmation.gas_used);
    Ok(())
}

/// Print the IBC transfer timeout height derived from the latest block.
pub async fn run_timeout_height(cfg: Config) -> Result<()> {
    let client = LcdClient::new(cfg.lcd.base_url.clone());
    let height = transfer::timeout_height(&client).await?;
    println!("timeout height: {}", height);
    Ok(())
}
