use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use crate::poller::{PollerConfig, DEFAULT_CONFIRM_TIMEOUT, DEFAULT_POLL_INTERVAL};

#[derive(Debug, Clone, Deserialize)]
pub struct LcdCfg {
    pub base_url: String,
}

impl Default for LcdCfg {
    fn default() -> Self {
        Self {
            base_url: "https://api.osmosis.zone".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollCfg {
    pub interval_secs: u64,
    pub timeout_secs: u64,
}

impl Default for PollCfg {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            timeout_secs: DEFAULT_CONFIRM_TIMEOUT.as_secs(),
        }
    }
}

/// One symbol→denomination mapping. The registry defaults cover OSMO, ATOM,
/// and USDC when the config lists nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetEntry {
    pub symbol: String,
    pub denom: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lcd: LcdCfg,
    #[serde(default)]
    pub poll: PollCfg,
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s).context("parse Config.toml")?;
        Ok(cfg)
    }

    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            interval: Duration::from_secs(self.poll.interval_secs),
            timeout: Duration::from_secs(self.poll.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let raw = r#"
            [lcd]
            base_url = "https://example.test"

            [poll]
            interval_secs = 2
            timeout_secs = 60

            [[assets]]
            symbol = "OSMO"
            denom = "uosmo"
        "#;
        let cfg: Config = toml::from_str(raw).unwrap();
        assert_eq!(cfg.lcd.base_url, "https://example.test");
        assert_eq!(cfg.poller_config().interval, Duration::from_secs(2));
        assert_eq!(cfg.assets.len(), 1);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.poll.interval_secs, 5);
        assert_eq!(cfg.poll.timeout_secs, 300);
        assert!(cfg.assets.is_empty());
    }
}
