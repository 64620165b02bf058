//! NSE universe management.
//!
//! This module provides symbol normalization between data providers and
//! the NIFTY 50 constituent list with sector classifications.

pub mod nifty;
pub mod sector;
pub mod symbol;

pub use nifty::{Constituent, NiftyUniverse};
pub use sector::NseSector;
pub use symbol::{NseSymbol, SymbolError};

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().contains(&symbol.to_string())
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for NiftyUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_trait() {
        let universe = NiftyUniverse::new();

        assert!(universe.contains("RELIANCE"));
        assert!(!universe.contains("NOTREAL"));
        assert!(universe.size() >= 50);
    }
}
