//! Threshold buckets and the overall financial-health rating.
//!
//! Boundary values always fall into the lower bucket: a current ratio of
//! exactly 1.5 is Comfortable, not Excellent.

use crate::ratios::RatioSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Liquidity band for the current ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidityBand {
    /// Current ratio above 1.5.
    Excellent,
    /// Current ratio above 1.0, up to and including 1.5.
    Comfortable,
    /// Current ratio above 0.8, up to and including 1.0.
    Tight,
    /// Current ratio at or below 0.8.
    Stressed,
}

impl LiquidityBand {
    /// Classify a current ratio.
    #[must_use]
    pub fn classify(current_ratio: f64) -> Self {
        if current_ratio > 1.5 {
            Self::Excellent
        } else if current_ratio > 1.0 {
            Self::Comfortable
        } else if current_ratio > 0.8 {
            Self::Tight
        } else {
            Self::Stressed
        }
    }

    const fn score(self) -> u8 {
        match self {
            Self::Excellent => 3,
            Self::Comfortable => 2,
            Self::Tight => 1,
            Self::Stressed => 0,
        }
    }
}

impl fmt::Display for LiquidityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "excellent",
            Self::Comfortable => "comfortable",
            Self::Tight => "tight",
            Self::Stressed => "stressed",
        };
        write!(f, "{label}")
    }
}

/// Leverage band for the debt-to-equity ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeverageBand {
    /// Debt-to-equity below 0.5.
    Conservative,
    /// Debt-to-equity from 0.5 up to (excluding) 1.0.
    Moderate,
    /// Debt-to-equity from 1.0 up to (excluding) 2.0.
    Elevated,
    /// Debt-to-equity of 2.0 or more.
    Aggressive,
}

impl LeverageBand {
    /// Classify a debt-to-equity ratio.
    #[must_use]
    pub fn classify(debt_to_equity: f64) -> Self {
        if debt_to_equity < 0.5 {
            Self::Conservative
        } else if debt_to_equity < 1.0 {
            Self::Moderate
        } else if debt_to_equity < 2.0 {
            Self::Elevated
        } else {
            Self::Aggressive
        }
    }

    const fn score(self) -> u8 {
        match self {
            Self::Conservative => 3,
            Self::Moderate => 2,
            Self::Elevated => 1,
            Self::Aggressive => 0,
        }
    }
}

impl fmt::Display for LeverageBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::Aggressive => "aggressive",
        };
        write!(f, "{label}")
    }
}

/// Band for the debt-to-assets ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtAssetsBand {
    /// Liabilities below 40% of assets.
    Low,
    /// Liabilities from 40% up to (excluding) 60% of assets.
    Moderate,
    /// Liabilities at 60% of assets or more.
    High,
}

impl DebtAssetsBand {
    /// Classify a debt-to-assets ratio.
    #[must_use]
    pub fn classify(debt_to_assets: f64) -> Self {
        if debt_to_assets < 0.4 {
            Self::Low
        } else if debt_to_assets < 0.6 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    const fn score(self) -> u8 {
        match self {
            Self::Low => 2,
            Self::Moderate => 1,
            Self::High => 0,
        }
    }
}

impl fmt::Display for DebtAssetsBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        write!(f, "{label}")
    }
}

/// Band for the equity ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquityBand {
    /// Equity at 50% of assets or more.
    Strong,
    /// Equity from 30% up to (excluding) 50% of assets.
    Adequate,
    /// Equity below 30% of assets.
    Thin,
}

impl EquityBand {
    /// Classify an equity ratio.
    #[must_use]
    pub fn classify(equity_ratio: f64) -> Self {
        if equity_ratio >= 0.5 {
            Self::Strong
        } else if equity_ratio >= 0.3 {
            Self::Adequate
        } else {
            Self::Thin
        }
    }

    const fn score(self) -> u8 {
        match self {
            Self::Strong => 2,
            Self::Adequate => 1,
            Self::Thin => 0,
        }
    }
}

impl fmt::Display for EquityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Strong => "strong",
            Self::Adequate => "adequate",
            Self::Thin => "thin",
        };
        write!(f, "{label}")
    }
}

/// Overall financial-health rating rolled up from the four bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRating {
    /// At least three quarters of the attainable score.
    Strong,
    /// At least half of the attainable score.
    Adequate,
    /// At least thirty percent of the attainable score.
    Strained,
    /// Below thirty percent of the attainable score.
    Critical,
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Strong => "Strong",
            Self::Adequate => "Adequate",
            Self::Strained => "Strained",
            Self::Critical => "Critical",
        };
        write!(f, "{label}")
    }
}

/// Per-ratio bands plus the overall rating for one fiscal year.
///
/// Each band is `Some` only when its underlying ratio was computable; the
/// overall rating is `None` when no band is available at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// Fiscal year being assessed.
    pub fiscal_year: i32,
    /// Liquidity band from the current ratio.
    pub liquidity: Option<LiquidityBand>,
    /// Leverage band from debt-to-equity.
    pub leverage: Option<LeverageBand>,
    /// Debt-to-assets band.
    pub debt_assets: Option<DebtAssetsBand>,
    /// Equity-ratio band.
    pub equity: Option<EquityBand>,
    /// Overall rating over the available bands.
    pub rating: Option<HealthRating>,
}

impl HealthAssessment {
    /// Assess one year's ratio set.
    #[must_use]
    pub fn from_ratios(ratios: &RatioSet) -> Self {
        let liquidity = ratios.current_ratio.map(LiquidityBand::classify);
        let leverage = ratios.debt_to_equity.map(LeverageBand::classify);
        let debt_assets = ratios.debt_to_assets.map(DebtAssetsBand::classify);
        let equity = ratios.equity_ratio.map(EquityBand::classify);

        // Score only the bands we could compute; the rating compares the
        // achieved score against the attainable maximum for those bands.
        let mut achieved = 0u8;
        let mut attainable = 0u8;
        if let Some(b) = liquidity {
            achieved += b.score();
            attainable += 3;
        }
        if let Some(b) = leverage {
            achieved += b.score();
            attainable += 3;
        }
        if let Some(b) = debt_assets {
            achieved += b.score();
            attainable += 2;
        }
        if let Some(b) = equity {
            achieved += b.score();
            attainable += 2;
        }

        let rating = if attainable == 0 {
            None
        } else {
            let pct = f64::from(achieved) / f64::from(attainable);
            Some(if pct >= 0.75 {
                HealthRating::Strong
            } else if pct >= 0.5 {
                HealthRating::Adequate
            } else if pct >= 0.3 {
                HealthRating::Strained
            } else {
                HealthRating::Critical
            })
        };

        Self {
            fiscal_year: ratios.fiscal_year,
            liquidity,
            leverage,
            debt_assets,
            equity,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.51, LiquidityBand::Excellent)]
    #[case(1.5, LiquidityBand::Comfortable)]
    #[case(1.01, LiquidityBand::Comfortable)]
    #[case(1.0, LiquidityBand::Tight)]
    #[case(0.81, LiquidityBand::Tight)]
    #[case(0.8, LiquidityBand::Stressed)]
    #[case(0.2, LiquidityBand::Stressed)]
    fn test_liquidity_boundaries(#[case] ratio: f64, #[case] expected: LiquidityBand) {
        assert_eq!(LiquidityBand::classify(ratio), expected);
    }

    #[rstest]
    #[case(0.49, LeverageBand::Conservative)]
    #[case(0.5, LeverageBand::Moderate)]
    #[case(0.99, LeverageBand::Moderate)]
    #[case(1.0, LeverageBand::Elevated)]
    #[case(1.99, LeverageBand::Elevated)]
    #[case(2.0, LeverageBand::Aggressive)]
    fn test_leverage_boundaries(#[case] ratio: f64, #[case] expected: LeverageBand) {
        assert_eq!(LeverageBand::classify(ratio), expected);
    }

    #[rstest]
    #[case(0.39, DebtAssetsBand::Low)]
    #[case(0.4, DebtAssetsBand::Moderate)]
    #[case(0.59, DebtAssetsBand::Moderate)]
    #[case(0.6, DebtAssetsBand::High)]
    fn test_debt_assets_boundaries(#[case] ratio: f64, #[case] expected: DebtAssetsBand) {
        assert_eq!(DebtAssetsBand::classify(ratio), expected);
    }

    #[rstest]
    #[case(0.5, EquityBand::Strong)]
    #[case(0.49, EquityBand::Adequate)]
    #[case(0.3, EquityBand::Adequate)]
    #[case(0.29, EquityBand::Thin)]
    fn test_equity_boundaries(#[case] ratio: f64, #[case] expected: EquityBand) {
        assert_eq!(EquityBand::classify(ratio), expected);
    }

    fn ratio_set(
        current: Option<f64>,
        leverage: Option<f64>,
        debt_assets: Option<f64>,
        equity: Option<f64>,
    ) -> RatioSet {
        RatioSet {
            fiscal_year: 2024,
            date: "2024-03-31".to_string(),
            current_ratio: current,
            debt_to_equity: leverage,
            debt_to_assets: debt_assets,
            equity_ratio: equity,
        }
    }

    #[test]
    fn test_strong_assessment() {
        let assessment = HealthAssessment::from_ratios(&ratio_set(
            Some(2.1),
            Some(0.2),
            Some(0.3),
            Some(0.6),
        ));

        assert_eq!(assessment.liquidity, Some(LiquidityBand::Excellent));
        assert_eq!(assessment.leverage, Some(LeverageBand::Conservative));
        assert_eq!(assessment.debt_assets, Some(DebtAssetsBand::Low));
        assert_eq!(assessment.equity, Some(EquityBand::Strong));
        assert_eq!(assessment.rating, Some(HealthRating::Strong));
    }

    #[test]
    fn test_critical_assessment() {
        let assessment = HealthAssessment::from_ratios(&ratio_set(
            Some(0.5),
            Some(3.0),
            Some(0.9),
            Some(0.1),
        ));
        assert_eq!(assessment.rating, Some(HealthRating::Critical));
    }

    #[test]
    fn test_partial_data_still_rated() {
        // Only liquidity available: 2 of an attainable 3 -> Adequate.
        let assessment =
            HealthAssessment::from_ratios(&ratio_set(Some(1.2), None, None, None));
        assert_eq!(assessment.leverage, None);
        assert_eq!(assessment.rating, Some(HealthRating::Adequate));
    }

    #[test]
    fn test_no_data_no_rating() {
        let assessment = HealthAssessment::from_ratios(&ratio_set(None, None, None, None));
        assert_eq!(assessment.rating, None);
    }
}
