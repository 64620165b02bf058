//! NSE sector classification as used by the NIFTY indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// NSE sectors covering the NIFTY 50 constituents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NseSector {
    /// Financial Services
    FinancialServices,

    /// Information Technology
    InformationTechnology,

    /// Oil, Gas & Consumable Fuels
    OilGasConsumableFuels,

    /// Fast Moving Consumer Goods
    FastMovingConsumerGoods,

    /// Automobile and Auto Components
    Automobile,

    /// Healthcare
    Healthcare,

    /// Metals & Mining
    MetalsMining,

    /// Construction
    Construction,

    /// Construction Materials
    ConstructionMaterials,

    /// Power
    Power,

    /// Telecommunication
    Telecommunication,

    /// Consumer Durables
    ConsumerDurables,

    /// Services
    Services,

    /// Chemicals
    Chemicals,
}

impl NseSector {
    /// Returns all NSE sectors.
    pub fn all() -> Vec<Self> {
        vec![
            Self::FinancialServices,
            Self::InformationTechnology,
            Self::OilGasConsumableFuels,
            Self::FastMovingConsumerGoods,
            Self::Automobile,
            Self::Healthcare,
            Self::MetalsMining,
            Self::Construction,
            Self::ConstructionMaterials,
            Self::Power,
            Self::Telecommunication,
            Self::ConsumerDurables,
            Self::Services,
            Self::Chemicals,
        ]
    }

    /// Returns the full sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FinancialServices => "Financial Services",
            Self::InformationTechnology => "Information Technology",
            Self::OilGasConsumableFuels => "Oil, Gas & Consumable Fuels",
            Self::FastMovingConsumerGoods => "Fast Moving Consumer Goods",
            Self::Automobile => "Automobile and Auto Components",
            Self::Healthcare => "Healthcare",
            Self::MetalsMining => "Metals & Mining",
            Self::Construction => "Construction",
            Self::ConstructionMaterials => "Construction Materials",
            Self::Power => "Power",
            Self::Telecommunication => "Telecommunication",
            Self::ConsumerDurables => "Consumer Durables",
            Self::Services => "Services",
            Self::Chemicals => "Chemicals",
        }
    }

    /// Parse a sector from its full name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for NseSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sectors() {
        let sectors = NseSector::all();
        assert_eq!(sectors.len(), 14);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            NseSector::from_name("Information Technology"),
            Some(NseSector::InformationTechnology)
        );
        assert_eq!(NseSector::from_name("Power"), Some(NseSector::Power));
        assert_eq!(NseSector::from_name("Unknown"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", NseSector::OilGasConsumableFuels),
            "Oil, Gas & Consumable Fuels"
        );
        assert_eq!(format!("{}", NseSector::Healthcare), "Healthcare");
    }
}
