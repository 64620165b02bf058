//! CSV and JSON export of fetched statements and derived ratios.

use madras_analysis::RatioSet;
use madras_data::BalanceSheetRow;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One balance-sheet statement flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceSheetExport {
    /// Ticker symbol.
    pub symbol: String,

    /// Statement date (YYYY-MM-DD).
    pub date: String,

    /// Total assets.
    pub total_assets: Option<f64>,

    /// Total liabilities.
    pub total_liabilities: Option<f64>,

    /// Total stockholders' equity.
    pub total_stockholders_equity: Option<f64>,

    /// Total current assets.
    pub total_current_assets: Option<f64>,

    /// Total current liabilities.
    pub total_current_liabilities: Option<f64>,

    /// Cash and cash equivalents.
    pub cash_and_cash_equivalents: Option<f64>,
}

impl From<&BalanceSheetRow> for BalanceSheetExport {
    fn from(row: &BalanceSheetRow) -> Self {
        Self {
            symbol: row.symbol.clone(),
            date: row.date.clone(),
            total_assets: row.total_assets,
            total_liabilities: row.total_liabilities,
            total_stockholders_equity: row.total_stockholders_equity,
            total_current_assets: row.total_current_assets,
            total_current_liabilities: row.total_current_liabilities,
            cash_and_cash_equivalents: row.cash_and_cash_equivalents,
        }
    }
}

/// One year's derived ratios flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatioExport {
    /// Ticker symbol.
    pub symbol: String,

    /// Fiscal year.
    pub fiscal_year: i32,

    /// Current ratio, when computable.
    pub current_ratio: Option<f64>,

    /// Debt-to-equity ratio, when computable.
    pub debt_to_equity: Option<f64>,

    /// Debt-to-assets ratio, when computable.
    pub debt_to_assets: Option<f64>,

    /// Equity ratio, when computable.
    pub equity_ratio: Option<f64>,
}

impl RatioExport {
    /// Flatten one ratio set for a symbol.
    #[must_use]
    pub fn from_ratios(symbol: &str, ratios: &RatioSet) -> Self {
        Self {
            symbol: symbol.to_string(),
            fiscal_year: ratios.fiscal_year,
            current_ratio: ratios.current_ratio,
            debt_to_equity: ratios.debt_to_equity,
            debt_to_assets: ratios.debt_to_assets,
            equity_ratio: ratios.equity_ratio,
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn records_to_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)
        .unwrap_or_default();
    Ok(data)
}

impl Exporter for Vec<BalanceSheetExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => records_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<RatioExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => records_to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(date: &str, assets: Option<f64>) -> BalanceSheetExport {
        BalanceSheetExport {
            symbol: "TCS".to_string(),
            date: date.to_string(),
            total_assets: assets,
            total_liabilities: Some(1.0e11),
            total_stockholders_equity: Some(2.0e11),
            total_current_assets: Some(1.2e11),
            total_current_liabilities: Some(0.7e11),
            cash_and_cash_equivalents: Some(0.4e11),
        }
    }

    fn ratio_rows() -> Vec<RatioExport> {
        vec![
            RatioExport {
                symbol: "TCS".to_string(),
                fiscal_year: 2023,
                current_ratio: Some(1.71),
                debt_to_equity: Some(0.5),
                debt_to_assets: Some(0.33),
                equity_ratio: Some(0.67),
            },
            RatioExport {
                symbol: "TCS".to_string(),
                fiscal_year: 2024,
                current_ratio: None,
                debt_to_equity: Some(0.45),
                debt_to_assets: Some(0.31),
                equity_ratio: Some(0.69),
            },
        ]
    }

    #[test]
    fn test_balance_sheet_export_csv() {
        let rows = vec![sheet("2023-03-31", Some(3.0e11)), sheet("2024-03-31", None)];
        let csv = rows.export_to_string(ExportFormat::Csv).unwrap();

        assert!(csv.starts_with("symbol,date,total_assets"));
        assert!(csv.contains("TCS,2023-03-31,300000000000"));
        // Missing values become empty cells.
        assert!(csv.contains("TCS,2024-03-31,,"));
    }

    #[test]
    fn test_ratio_export_csv() {
        let csv = ratio_rows().export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("symbol,fiscal_year,current_ratio"));
        assert!(csv.contains("TCS,2023,1.71"));
        assert!(csv.contains("TCS,2024,,0.45"));
    }

    #[test]
    fn test_ratio_export_json() {
        let json = ratio_rows().export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"fiscal_year\":2023"));
        assert!(json.contains("\"current_ratio\":null"));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let json = ratio_rows()
            .export_to_string(ExportFormat::PrettyJson)
            .unwrap();
        assert!(json.contains("  \"symbol\""));
    }

    #[test]
    fn test_export_to_file() {
        use std::io::Read;

        let path = std::env::temp_dir().join("madras_ratio_export.csv");
        ratio_rows()
            .export_to_file(&path, ExportFormat::Csv)
            .unwrap();

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains("TCS,2023"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[test]
    fn test_from_balance_sheet_row() {
        let row = BalanceSheetRow {
            date: "2024-03-31".to_string(),
            symbol: "INFY".to_string(),
            period: "FY".to_string(),
            total_assets: Some(1.0),
            total_liabilities: Some(0.4),
            total_stockholders_equity: Some(0.6),
            total_current_assets: None,
            total_current_liabilities: None,
            long_term_debt: None,
            cash_and_cash_equivalents: Some(0.1),
        };

        let export = BalanceSheetExport::from(&row);
        assert_eq!(export.symbol, "INFY");
        assert_eq!(export.total_current_assets, None);
        assert_eq!(export.cash_and_cash_equivalents, Some(0.1));
    }
}
