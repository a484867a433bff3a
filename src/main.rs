use anyhow::Result;
use clap::{Parser, Subcommand};

use osmoquote::app;
use osmoquote::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Osmosis AMM quoting and transaction confirmation CLI")]
struct Args {
    /// LCD base URL (overrides config)
    #[arg(long)]
    lcd_url: Option<String>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote a swap against the first matching constant-product pool
    Quote {
        /// Sell asset symbol (e.g. OSMO)
        #[arg(long)]
        sell: String,

        /// Buy asset symbol (e.g. ATOM)
        #[arg(long)]
        buy: String,

        /// Sell amount in base units (0 quotes a notional single unit)
        #[arg(long, default_value = "0")]
        amount: u64,
    },
    /// Poll a transaction until it confirms or times out
    WatchTx {
        /// Transaction id to watch
        txid: String,
    },
    /// Print the IBC transfer timeout height (latest block + 100)
    TimeoutHeight,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(lcd_url) = args.lcd_url {
        cfg.lcd.base_url = lcd_url;
    }

    match args.command {
        Command::Quote { sell, buy, amount } => app::run_quote(cfg, &sell, &buy, amount).await,
        Command::WatchTx { txid } => app::run_watch_tx(cfg, &txid).await,
        Command::TimeoutHeight => app::run_timeout_height(cfg).await,
    }
}
