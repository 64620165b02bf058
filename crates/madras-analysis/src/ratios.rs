//! Derived balance-sheet ratios.
//!
//! Every ratio is `Option<f64>`: a missing line item or a degenerate
//! denominator yields `None` rather than an infinity or a sign-flipped
//! number. Debt-to-equity is additionally nulled when equity is non-positive,
//! since leverage against negative equity has no economic reading.

use crate::error::{AnalysisError, Result};
use madras_data::BalanceSheetRow;
use serde::{Deserialize, Serialize};

/// The four derived ratios for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Fiscal year the statement covers.
    pub fiscal_year: i32,
    /// Statement date (YYYY-MM-DD).
    pub date: String,
    /// Current assets / current liabilities.
    pub current_ratio: Option<f64>,
    /// Long-term debt / stockholders' equity.
    pub debt_to_equity: Option<f64>,
    /// Total liabilities / total assets.
    pub debt_to_assets: Option<f64>,
    /// Stockholders' equity / total assets.
    pub equity_ratio: Option<f64>,
}

impl RatioSet {
    /// Compute the ratio set for one statement.
    ///
    /// Returns `None` when the statement date cannot be parsed into a fiscal
    /// year; individual ratios are `None` on their own when inputs are
    /// missing.
    #[must_use]
    pub fn from_row(row: &BalanceSheetRow) -> Option<Self> {
        let fiscal_year = row.fiscal_year()?;

        let debt_to_equity = match row.total_stockholders_equity {
            Some(equity) if equity > 0.0 => safe_div(row.long_term_debt, Some(equity)),
            _ => None,
        };

        Some(Self {
            fiscal_year,
            date: row.date.clone(),
            current_ratio: safe_div(row.total_current_assets, row.total_current_liabilities),
            debt_to_equity,
            debt_to_assets: safe_div(row.total_liabilities, row.total_assets),
            equity_ratio: safe_div(row.total_stockholders_equity, row.total_assets),
        })
    }

    /// True when no ratio could be computed at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current_ratio.is_none()
            && self.debt_to_equity.is_none()
            && self.debt_to_assets.is_none()
            && self.equity_ratio.is_none()
    }
}

/// Division that propagates missing operands and rejects zero denominators.
fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let n = numerator?;
    let d = denominator?;
    if d == 0.0 || !n.is_finite() || !d.is_finite() {
        None
    } else {
        Some(n / d)
    }
}

/// Compute ratio sets for a statement history, oldest first.
///
/// Rows with unparseable dates are skipped; an entirely empty or unusable
/// history is an error, mirroring the top-level "no data found" path.
pub fn ratio_history(symbol: &str, rows: &[BalanceSheetRow]) -> Result<Vec<RatioSet>> {
    if rows.is_empty() {
        return Err(AnalysisError::EmptyHistory(symbol.to_string()));
    }

    let mut history: Vec<RatioSet> = rows.iter().filter_map(RatioSet::from_row).collect();
    if history.is_empty() {
        return Err(AnalysisError::EmptyHistory(symbol.to_string()));
    }

    history.sort_by_key(|r| r.fiscal_year);
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn row(
        date: &str,
        assets: Option<f64>,
        liabilities: Option<f64>,
        equity: Option<f64>,
        current_assets: Option<f64>,
        current_liabilities: Option<f64>,
        long_term_debt: Option<f64>,
    ) -> BalanceSheetRow {
        BalanceSheetRow {
            date: date.to_string(),
            symbol: "TCS".to_string(),
            period: "FY".to_string(),
            total_assets: assets,
            total_liabilities: liabilities,
            total_stockholders_equity: equity,
            total_current_assets: current_assets,
            total_current_liabilities: current_liabilities,
            long_term_debt,
            cash_and_cash_equivalents: Some(0.0),
        }
    }

    #[test]
    fn test_full_ratio_set() {
        let r = row(
            "2024-03-31",
            Some(1000.0),
            Some(400.0),
            Some(600.0),
            Some(300.0),
            Some(200.0),
            Some(150.0),
        );
        let ratios = RatioSet::from_row(&r).unwrap();

        assert_eq!(ratios.fiscal_year, 2024);
        assert_relative_eq!(ratios.current_ratio.unwrap(), 1.5);
        assert_relative_eq!(ratios.debt_to_equity.unwrap(), 0.25);
        assert_relative_eq!(ratios.debt_to_assets.unwrap(), 0.4);
        assert_relative_eq!(ratios.equity_ratio.unwrap(), 0.6);
    }

    #[test]
    fn test_missing_line_item_propagates() {
        let r = row(
            "2024-03-31",
            Some(1000.0),
            Some(400.0),
            Some(600.0),
            None,
            Some(200.0),
            Some(150.0),
        );
        let ratios = RatioSet::from_row(&r).unwrap();

        assert_eq!(ratios.current_ratio, None);
        assert!(ratios.debt_to_equity.is_some());
    }

    #[test]
    fn test_zero_denominator_is_none() {
        let r = row(
            "2024-03-31",
            Some(0.0),
            Some(400.0),
            Some(600.0),
            Some(300.0),
            Some(0.0),
            Some(150.0),
        );
        let ratios = RatioSet::from_row(&r).unwrap();

        assert_eq!(ratios.current_ratio, None);
        assert_eq!(ratios.debt_to_assets, None);
        assert_eq!(ratios.equity_ratio, None);
    }

    #[rstest]
    #[case(Some(0.0))]
    #[case(Some(-250.0))]
    #[case(None)]
    fn test_non_positive_equity_nulls_leverage(#[case] equity: Option<f64>) {
        let r = row(
            "2024-03-31",
            Some(1000.0),
            Some(400.0),
            equity,
            Some(300.0),
            Some(200.0),
            Some(150.0),
        );
        let ratios = RatioSet::from_row(&r).unwrap();
        assert_eq!(ratios.debt_to_equity, None);
    }

    #[test]
    fn test_history_sorted_oldest_first() {
        let rows = vec![
            row("2024-03-31", Some(1.0), Some(1.0), Some(1.0), None, None, None),
            row("2020-03-31", Some(1.0), Some(1.0), Some(1.0), None, None, None),
            row("2022-03-31", Some(1.0), Some(1.0), Some(1.0), None, None, None),
        ];
        let history = ratio_history("TCS", &rows).unwrap();
        let years: Vec<i32> = history.iter().map(|r| r.fiscal_year).collect();
        assert_eq!(years, vec![2020, 2022, 2024]);
    }

    #[test]
    fn test_empty_history_is_error() {
        let result = ratio_history("TCS", &[]);
        assert!(matches!(result, Err(AnalysisError::EmptyHistory(_))));
    }

    #[test]
    fn test_unparseable_dates_skipped() {
        let rows = vec![row("not-a-date", Some(1.0), Some(1.0), Some(1.0), None, None, None)];
        let result = ratio_history("TCS", &rows);
        assert!(matches!(result, Err(AnalysisError::EmptyHistory(_))));
    }
}
