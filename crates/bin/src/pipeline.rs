//! Pipeline helpers behind the `analyze` command.

use chrono::{Duration, Utc};
use madras::nse::{NiftyUniverse, NseSymbol, Universe};
use madras_ai::{OpenAiClient, build_prompt};
use madras_data::{BalanceSheetRow, DataError, YahooQuoteProvider};
use madras_output::NarrativeSource;
use std::io::{BufRead, Write};

/// Well-known constituents suggested when a symbol lookup comes back empty.
const SUGGESTED_SYMBOLS: [&str; 3] = ["INFY", "RELIANCE", "HDFCBANK"];

/// Render a fetch error, appending universe constituents as suggestions when
/// the symbol itself looked wrong.
pub fn describe_fetch_error(err: &DataError, universe: &NiftyUniverse) -> String {
    match err {
        DataError::SymbolNotFound(_) | DataError::MissingData { .. } => {
            let known: Vec<&str> = SUGGESTED_SYMBOLS
                .iter()
                .copied()
                .filter(|s| universe.contains(s))
                .collect();
            format!("{err}. Try: {}", known.join(", "))
        }
        _ => err.to_string(),
    }
}

/// Read a symbol from stdin when none was given on the command line.
pub fn prompt_for_symbol() -> Result<NseSymbol, Box<dyn std::error::Error>> {
    print!("Enter NSE symbol (e.g. TCS, RELIANCE): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(NseSymbol::parse(&line)?)
}

/// Latest close and trailing-year change from Yahoo Finance.
///
/// Quote failures degrade the report rather than abort it, so this only
/// logs and returns nothing on error.
pub async fn fetch_price_context(
    provider: &YahooQuoteProvider,
    symbol: &NseSymbol,
) -> (Option<f64>, Option<f64>) {
    let end = Utc::now();
    let start = end - Duration::days(365);

    match provider
        .fetch_closing_prices(&symbol.to_yahoo(), start, end)
        .await
    {
        Ok(prices) => {
            let latest = prices.last().map(|p| p.close);
            let year_change = match (prices.first(), prices.last()) {
                (Some(first), Some(last)) if first.close > 0.0 => {
                    Some((last.close - first.close) / first.close)
                }
                _ => None,
            };
            (latest, year_change)
        }
        Err(e) => {
            tracing::warn!(symbol = %symbol, error = %e, "quote fetch failed");
            (None, None)
        }
    }
}

/// Produce the narrative, preferring the AI path when requested.
///
/// An AI failure falls back to the rule-based templates so the report
/// always carries a summary.
pub async fn narrative_for(
    use_ai: bool,
    symbol: &NseSymbol,
    rows: &[BalanceSheetRow],
    fallback: impl FnOnce() -> String,
) -> (String, NarrativeSource) {
    if use_ai {
        match ai_narrative(symbol, rows).await {
            Ok(text) => return (text, NarrativeSource::Ai),
            Err(e) => {
                tracing::warn!(symbol = %symbol, error = %e, "AI summary failed, using rule-based narrative");
            }
        }
    }
    (fallback(), NarrativeSource::RuleBased)
}

async fn ai_narrative(
    symbol: &NseSymbol,
    rows: &[BalanceSheetRow],
) -> madras_ai::Result<String> {
    let client = OpenAiClient::from_env()?;
    let prompt = build_prompt(symbol.as_plain(), rows)?;
    client.analyze(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_symbol_gets_suggestions() {
        let universe = NiftyUniverse::new();
        let err = DataError::SymbolNotFound("ZZZZ".to_string());
        assert_eq!(
            describe_fetch_error(&err, &universe),
            "No data found for symbol: ZZZZ. Try: INFY, RELIANCE, HDFCBANK"
        );
    }

    #[test]
    fn test_empty_statements_get_suggestions() {
        let universe = NiftyUniverse::new();
        let err = DataError::MissingData {
            symbol: "ZZZZ".to_string(),
            reason: "No balance-sheet statements returned".to_string(),
        };
        assert!(describe_fetch_error(&err, &universe).contains("Try: INFY, RELIANCE, HDFCBANK"));
    }

    #[test]
    fn test_other_errors_carry_no_suggestions() {
        let universe = NiftyUniverse::new();
        let msg = describe_fetch_error(&DataError::RateLimit, &universe);
        assert!(!msg.contains("Try:"));
    }
}
