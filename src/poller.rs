//! Transaction confirmation polling
//!
//! Timer-driven loop over a status source: one tick per interval, ticks never
//! overlap for a transaction because the next is only scheduled after the
//! previous read completes. Terminal outcomes are success, timeout, and
//! cancellation. A failed on-chain status keeps polling until the timeout;
//! callers depend on that, so it is logged rather than terminated on.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::errors::SwapError;
use crate::lcd::{TxStatus, TxStatusSource};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_CONFIRM_TIMEOUT,
        }
    }
}

/// Terminal result of a successful poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxConfirmation {
    pub txid: String,
    pub gas_used: String,
}

/// Cancels an in-flight poll. Dropping the handle without calling `cancel`
/// leaves the poll running to its own timeout.
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Handle dropped without cancelling; never resolve.
                std::future::pending::<()>().await;
            }
        }
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Polls a status source for one transaction until a terminal outcome.
pub struct TxPoller<S> {
    source: S,
    config: PollerConfig,
}

impl<S: TxStatusSource> TxPoller<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, PollerConfig::default())
    }

    pub fn with_config(source: S, config: PollerConfig) -> Self {
        Self { source, config }
    }

    /// Poll without an external cancellation hook.
    pub async fn wait_for_confirmation(&self, txid: &str) -> Result<TxConfirmation, SwapError> {
        let (_handle, token) = cancel_pair();
        self.wait_with_cancel(txid, token).await
    }

    /// Poll until success, timeout, or the token is cancelled.
    pub async fn wait_with_cancel(
        &self,
        txid: &str,
        mut cancel: CancelToken,
    ) -> Result<TxConfirmation, SwapError> {
        let started = Instant::now();
        info!("watching transaction {}", txid);
        loop {
            tokio::select! {
                _ = time::sleep(self.config.interval) => {}
                _ = cancel.cancelled() => {
                    info!("poll for {} cancelled", txid);
                    return Err(SwapError::Cancelled { txid: txid.to_string() });
                }
            }

            if started.elapsed() > self.config.timeout {
                return Err(SwapError::ConfirmTimeout {
                    txid: txid.to_string(),
                    waited: self.config.timeout.as_secs(),
                });
            }

            match self.source.tx_status(txid).await {
                TxStatus::Success { gas_used } => {
                    info!("transaction {} confirmed, gas used {}", txid, gas_used);
                    return Ok(TxConfirmation {
                        txid: txid.to_string(),
                        gas_used,
                    });
                }
                TxStatus::Failed { codespace } => {
                    // Not terminal: keep polling until the timeout.
                    warn!(
                        "transaction {} reported failure in codespace {}, still polling",
                        txid, codespace
                    );
                }
                TxStatus::NotFound => {
                    debug!("transaction {} not found yet", txid);
                }
            }
        }
    }
}
