//! Analyst prompt assembly.
//!
//! The balance-sheet history goes into the user prompt as a CSV table, the
//! same shape the analyst would paste into a spreadsheet.

use crate::error::Result;
use madras_data::BalanceSheetRow;

/// System prompt for the financial-analyst persona.
const SYSTEM_PROMPT: &str =
    "You are a financial analyst expert in Indian stock markets.";

/// A fully assembled chat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    /// System message.
    pub system: String,
    /// User message with the embedded CSV table.
    pub user: String,
}

/// Serialize the statement history to a CSV table.
///
/// Columns mirror the original analyst workflow: date, total assets, total
/// liabilities, stockholders' equity, cash. Missing items render as empty
/// cells.
fn statements_to_csv(rows: &[BalanceSheetRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "date",
        "totalAssets",
        "totalLiabilities",
        "totalStockholdersEquity",
        "cashAndCashEquivalents",
    ])?;

    for row in rows {
        let cell = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        writer.write_record([
            row.date.clone(),
            cell(row.total_assets),
            cell(row.total_liabilities),
            cell(row.total_stockholders_equity),
            cell(row.cash_and_cash_equivalents),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::AiError::Prompt(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| crate::error::AiError::Prompt(e.to_string()))
}

/// Build the analyst prompt for a symbol and its statement history.
pub fn build_prompt(symbol: &str, rows: &[BalanceSheetRow]) -> Result<AnalysisPrompt> {
    let table = statements_to_csv(rows)?;

    let user = format!(
        "Analyze the balance sheet trends for {symbol} (Indian Stock) below. Focus on:\n\
         1. Asset-Liability health\n\
         2. Debt-to-Equity trends\n\
         3. Liquidity risks\n\
         4. Overall financial stability\n\
         \n\
         Balance Sheet Data (Last {} years):\n\
         {table}",
        rows.len()
    );

    Ok(AnalysisPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, assets: Option<f64>) -> BalanceSheetRow {
        BalanceSheetRow {
            date: date.to_string(),
            symbol: "INFY".to_string(),
            period: "FY".to_string(),
            total_assets: assets,
            total_liabilities: Some(400.0),
            total_stockholders_equity: Some(600.0),
            total_current_assets: None,
            total_current_liabilities: None,
            long_term_debt: None,
            cash_and_cash_equivalents: Some(120.0),
        }
    }

    #[test]
    fn test_prompt_contains_symbol_and_table() {
        let rows = vec![row("2024-03-31", Some(1000.0)), row("2023-03-31", Some(900.0))];
        let prompt = build_prompt("INFY", &rows).unwrap();

        assert_eq!(
            prompt.system,
            "You are a financial analyst expert in Indian stock markets."
        );
        assert!(prompt.user.contains("INFY"));
        assert!(prompt.user.contains("Last 2 years"));
        assert!(prompt.user.contains("date,totalAssets,totalLiabilities"));
        assert!(prompt.user.contains("2024-03-31,1000,400,600,120"));
    }

    #[test]
    fn test_missing_line_item_renders_empty_cell() {
        let rows = vec![row("2024-03-31", None)];
        let prompt = build_prompt("INFY", &rows).unwrap();
        assert!(prompt.user.contains("2024-03-31,,400,600,120"));
    }
}
