//! Multi-year ratio trends.

use crate::ratios::RatioSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative tolerance below which a change counts as flat.
const FLAT_TOLERANCE: f64 = 0.05;

/// Direction of a ratio over the analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Ratio rose by more than the tolerance.
    Rising,
    /// Ratio fell by more than the tolerance.
    Falling,
    /// Ratio stayed within the tolerance.
    Flat,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Flat => "flat",
        };
        write!(f, "{label}")
    }
}

/// Trend of each ratio between the oldest and newest computable year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioTrends {
    /// Current-ratio trend.
    pub current_ratio: Option<TrendDirection>,
    /// Debt-to-equity trend.
    pub debt_to_equity: Option<TrendDirection>,
    /// Debt-to-assets trend.
    pub debt_to_assets: Option<TrendDirection>,
    /// Equity-ratio trend.
    pub equity_ratio: Option<TrendDirection>,
}

fn direction(first: f64, last: f64) -> TrendDirection {
    let base = first.abs().max(1e-12);
    let change = (last - first) / base;
    if change > FLAT_TOLERANCE {
        TrendDirection::Rising
    } else if change < -FLAT_TOLERANCE {
        TrendDirection::Falling
    } else {
        TrendDirection::Flat
    }
}

fn trend_of(history: &[RatioSet], pick: impl Fn(&RatioSet) -> Option<f64>) -> Option<TrendDirection> {
    let first = history.iter().find_map(&pick)?;
    let last = history.iter().rev().find_map(&pick)?;
    Some(direction(first, last))
}

/// Compute per-ratio trends over a history sorted oldest first.
///
/// Years where a ratio is missing are skipped; a ratio with no computable
/// year at all has no trend, and a single computable year compares against
/// itself and reads as flat.
#[must_use]
pub fn ratio_trends(history: &[RatioSet]) -> RatioTrends {
    RatioTrends {
        current_ratio: trend_of(history, |r| r.current_ratio),
        debt_to_equity: trend_of(history, |r| r.debt_to_equity),
        debt_to_assets: trend_of(history, |r| r.debt_to_assets),
        equity_ratio: trend_of(history, |r| r.equity_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(fy: i32, current: Option<f64>, leverage: Option<f64>) -> RatioSet {
        RatioSet {
            fiscal_year: fy,
            date: format!("{fy}-03-31"),
            current_ratio: current,
            debt_to_equity: leverage,
            debt_to_assets: None,
            equity_ratio: None,
        }
    }

    #[test]
    fn test_rising_and_falling() {
        let history = vec![
            year(2021, Some(1.0), Some(1.0)),
            year(2022, Some(1.2), Some(0.8)),
            year(2023, Some(1.4), Some(0.5)),
        ];
        let trends = ratio_trends(&history);
        assert_eq!(trends.current_ratio, Some(TrendDirection::Rising));
        assert_eq!(trends.debt_to_equity, Some(TrendDirection::Falling));
        assert_eq!(trends.debt_to_assets, None);
    }

    #[test]
    fn test_flat_within_tolerance() {
        let history = vec![year(2021, Some(1.00), None), year(2023, Some(1.03), None)];
        let trends = ratio_trends(&history);
        assert_eq!(trends.current_ratio, Some(TrendDirection::Flat));
    }

    #[test]
    fn test_single_computable_year_is_flat() {
        let history = vec![year(2023, Some(1.4), None)];
        let trends = ratio_trends(&history);
        assert_eq!(trends.current_ratio, Some(TrendDirection::Flat));
        assert_eq!(trends.debt_to_equity, None);
    }

    #[test]
    fn test_missing_years_skipped() {
        let history = vec![
            year(2021, None, Some(0.4)),
            year(2022, Some(1.0), None),
            year(2023, Some(1.5), Some(0.9)),
        ];
        let trends = ratio_trends(&history);
        // Current ratio compares 2022 against 2023.
        assert_eq!(trends.current_ratio, Some(TrendDirection::Rising));
        // Leverage compares 2021 against 2023.
        assert_eq!(trends.debt_to_equity, Some(TrendDirection::Rising));
    }
}
