//! NIFTY 50 universe with NSE sector classifications.

use crate::nse::sector::NseSector;
use std::collections::HashMap;

/// NIFTY 50 constituent with NSE sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    /// Stock symbol (bare NSE form, no `.NS` suffix).
    pub symbol: String,
    /// NSE sector.
    pub sector: NseSector,
}

impl Constituent {
    /// Create a new constituent.
    pub fn new(symbol: impl Into<String>, sector: NseSector) -> Self {
        Self {
            symbol: symbol.into(),
            sector,
        }
    }
}

/// NIFTY 50 universe.
#[derive(Debug, Clone)]
pub struct NiftyUniverse {
    constituents: Vec<Constituent>,
    symbol_to_sector: HashMap<String, NseSector>,
}

impl NiftyUniverse {
    /// Create a new NIFTY 50 universe with default constituents.
    pub fn new() -> Self {
        let constituents = Self::default_constituents();
        let symbol_to_sector = constituents
            .iter()
            .map(|c| (c.symbol.clone(), c.sector))
            .collect();

        Self {
            constituents,
            symbol_to_sector,
        }
    }

    /// Get all constituents.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    /// Get all symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.constituents.iter().map(|c| c.symbol.clone()).collect()
    }

    /// Get the NSE sector for a symbol.
    pub fn sector(&self, symbol: &str) -> Option<NseSector> {
        self.symbol_to_sector.get(symbol).copied()
    }

    /// Get all symbols in a specific sector.
    pub fn symbols_in_sector(&self, sector: NseSector) -> Vec<String> {
        self.constituents
            .iter()
            .filter(|c| c.sector == sector)
            .map(|c| c.symbol.clone())
            .collect()
    }

    /// Get the count of constituents per sector.
    pub fn sector_counts(&self) -> HashMap<NseSector, usize> {
        let mut counts = HashMap::new();
        for constituent in &self.constituents {
            *counts.entry(constituent.sector).or_insert(0) += 1;
        }
        counts
    }

    /// Default NIFTY 50 constituents.
    fn default_constituents() -> Vec<Constituent> {
        use NseSector::*;

        vec![
            // Financial Services - 11 stocks
            Constituent::new("HDFCBANK", FinancialServices),
            Constituent::new("ICICIBANK", FinancialServices),
            Constituent::new("SBIN", FinancialServices),
            Constituent::new("AXISBANK", FinancialServices),
            Constituent::new("KOTAKBANK", FinancialServices),
            Constituent::new("INDUSINDBK", FinancialServices),
            Constituent::new("BAJFINANCE", FinancialServices),
            Constituent::new("BAJAJFINSV", FinancialServices),
            Constituent::new("HDFCLIFE", FinancialServices),
            Constituent::new("SBILIFE", FinancialServices),
            Constituent::new("SHRIRAMFIN", FinancialServices),
            // Information Technology - 6 stocks
            Constituent::new("TCS", InformationTechnology),
            Constituent::new("INFY", InformationTechnology),
            Constituent::new("HCLTECH", InformationTechnology),
            Constituent::new("WIPRO", InformationTechnology),
            Constituent::new("TECHM", InformationTechnology),
            Constituent::new("LTIM", InformationTechnology),
            // Oil, Gas & Consumable Fuels - 4 stocks
            Constituent::new("RELIANCE", OilGasConsumableFuels),
            Constituent::new("ONGC", OilGasConsumableFuels),
            Constituent::new("BPCL", OilGasConsumableFuels),
            Constituent::new("COALINDIA", OilGasConsumableFuels),
            // Fast Moving Consumer Goods - 5 stocks
            Constituent::new("HINDUNILVR", FastMovingConsumerGoods),
            Constituent::new("ITC", FastMovingConsumerGoods),
            Constituent::new("NESTLEIND", FastMovingConsumerGoods),
            Constituent::new("BRITANNIA", FastMovingConsumerGoods),
            Constituent::new("TATACONSUM", FastMovingConsumerGoods),
            // Automobile and Auto Components - 6 stocks
            Constituent::new("MARUTI", Automobile),
            Constituent::new("TATAMOTORS", Automobile),
            Constituent::new("M&M", Automobile),
            Constituent::new("BAJAJ-AUTO", Automobile),
            Constituent::new("EICHERMOT", Automobile),
            Constituent::new("HEROMOTOCO", Automobile),
            // Healthcare - 5 stocks
            Constituent::new("SUNPHARMA", Healthcare),
            Constituent::new("CIPLA", Healthcare),
            Constituent::new("DRREDDY", Healthcare),
            Constituent::new("DIVISLAB", Healthcare),
            Constituent::new("APOLLOHOSP", Healthcare),
            // Metals & Mining - 3 stocks
            Constituent::new("TATASTEEL", MetalsMining),
            Constituent::new("JSWSTEEL", MetalsMining),
            Constituent::new("HINDALCO", MetalsMining),
            // Construction - 1 stock
            Constituent::new("LT", Construction),
            // Construction Materials - 2 stocks
            Constituent::new("ULTRACEMCO", ConstructionMaterials),
            Constituent::new("GRASIM", ConstructionMaterials),
            // Power - 2 stocks
            Constituent::new("NTPC", Power),
            Constituent::new("POWERGRID", Power),
            // Telecommunication - 1 stock
            Constituent::new("BHARTIARTL", Telecommunication),
            // Consumer Durables - 2 stocks
            Constituent::new("TITAN", ConsumerDurables),
            Constituent::new("ASIANPAINT", ConsumerDurables),
            // Services - 2 stocks
            Constituent::new("ADANIPORTS", Services),
            Constituent::new("ADANIENT", Services),
            // Chemicals - 1 stock
            Constituent::new("UPL", Chemicals),
        ]
    }
}

impl Default for NiftyUniverse {
    fn default() -> Self {
        Self::new()
    }
}
