//! Symbol to chain-native denomination registry

use std::collections::HashMap;

use crate::config::AssetEntry;
use crate::errors::SwapError;

pub const ATOM_DENOM: &str =
    "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";
pub const USDC_DENOM: &str =
    "ibc/D189335C6E4A68B513C10AB227BF253C0C318F70690161B147F84D39BCB4E8D5";

/// Maps human-readable symbols to denominations. Built from config so tests
/// and alternative networks can supply their own table.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    denoms: HashMap<String, String>,
}

impl AssetRegistry {
    pub fn new(entries: &[AssetEntry]) -> Self {
        let denoms = entries
            .iter()
            .map(|e| (e.symbol.to_uppercase(), e.denom.clone()))
            .collect();
        Self { denoms }
    }

    /// Resolve a symbol to its denomination. Unmapped symbols are an explicit
    /// input-validation error rather than an undefined denomination.
    pub fn denom(&self, symbol: &str) -> Result<&str, SwapError> {
        self.denoms
            .get(&symbol.to_uppercase())
            .map(String::as_str)
            .ok_or_else(|| SwapError::UnknownSymbol(symbol.to_string()))
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new(&[
            AssetEntry {
                symbol: "OSMO".to_string(),
                denom: "uosmo".to_string(),
            },
            AssetEntry {
                symbol: "ATOM".to_string(),
                denom: ATOM_DENOM.to_string(),
            },
            AssetEntry {
                symbol: "USDC".to_string(),
                denom: USDC_DENOM.to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_default_symbols() {
        let registry = AssetRegistry::default();
        assert_eq!(registry.denom("OSMO").unwrap(), "uosmo");
        assert_eq!(registry.denom("ATOM").unwrap(), ATOM_DENOM);
        assert_eq!(registry.denom("USDC").unwrap(), USDC_DENOM);
    }

    #[test]
    fn symbol_lookup_is_case_insensitive() {
        let registry = AssetRegistry::default();
        assert_eq!(registry.denom("osmo").unwrap(), "uosmo");
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let registry = AssetRegistry::default();
        assert_eq!(
            registry.denom("DOGE"),
            Err(SwapError::UnknownSymbol("DOGE".to_string()))
        );
    }
}
