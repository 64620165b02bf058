//! Typed FMP API responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports.
    #[default]
    Annual,
    /// Quarterly reports.
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Company profile data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub company_name: String,
    /// GICS-style sector label.
    #[serde(default)]
    pub sector: Option<String>,
    /// Industry label.
    #[serde(default)]
    pub industry: Option<String>,
    /// Reporting currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Market capitalization.
    #[serde(default)]
    pub mkt_cap: Option<f64>,
    /// Exchange short name (e.g., "NSE").
    #[serde(default)]
    pub exchange_short_name: Option<String>,
    /// Last traded price.
    #[serde(default)]
    pub price: Option<f64>,
}

impl CompanyProfile {
    /// Market capitalization in billions, if known.
    #[must_use]
    pub fn mkt_cap_billions(&self) -> Option<f64> {
        self.mkt_cap.map(|c| c / 1e9)
    }
}

/// One annual (or quarterly) balance-sheet statement from FMP.
///
/// Line items are `Option<f64>`: a missing or null item stays `None` and
/// propagates through every derived ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetRow {
    /// Statement date (YYYY-MM-DD).
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Reporting period ("FY", "Q1", ...).
    #[serde(default)]
    pub period: String,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Total liabilities.
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    /// Total stockholders' equity.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
    /// Total current assets.
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    /// Total current liabilities.
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    /// Long-term debt.
    #[serde(default)]
    pub long_term_debt: Option<f64>,
    /// Cash and cash equivalents.
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
}

impl BalanceSheetRow {
    /// Parse the statement date.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Fiscal year taken from the statement date.
    #[must_use]
    pub fn fiscal_year(&self) -> Option<i32> {
        self.date
            .split('-')
            .next()
            .and_then(|y| y.parse::<i32>().ok())
    }
}

/// Profile plus statement history for one company.
#[derive(Debug, Clone)]
pub struct CompanyData {
    /// Company profile.
    pub profile: CompanyProfile,
    /// Balance sheets, most recent first.
    pub balance_sheets: Vec<BalanceSheetRow>,
}

impl CompanyData {
    /// Get the most recent balance sheet.
    #[must_use]
    pub fn latest_balance(&self) -> Option<&BalanceSheetRow> {
        self.balance_sheets.first()
    }

    /// Balance sheets in chronological order (oldest first).
    #[must_use]
    pub fn chronological(&self) -> Vec<&BalanceSheetRow> {
        let mut rows: Vec<&BalanceSheetRow> = self.balance_sheets.iter().collect();
        rows.reverse();
        rows
    }
}
