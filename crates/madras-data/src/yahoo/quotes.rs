//! Closing-price history from Yahoo Finance.

use crate::error::{DataError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// One daily closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingPrice {
    /// Trading date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
    /// Dividend/split adjusted close.
    pub adj_close: f64,
    /// Traded volume.
    pub volume: u64,
}

/// Yahoo Finance quote provider with rate limiting.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider with default rate limiting (1 req/sec).
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay: Duration::from_millis(1000),
        }
    }

    /// Create a new Yahoo Finance quote provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay,
        }
    }

    /// Fetch daily closing prices for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol in Yahoo form (e.g., "TCS.NS")
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// Closing prices in chronological order.
    pub async fn fetch_closing_prices(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ClosingPrice>> {
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let prices = quotes
            .iter()
            .filter_map(|q| {
                DateTime::<Utc>::from_timestamp(q.timestamp, 0).map(|ts| ClosingPrice {
                    date: ts.date_naive(),
                    close: q.close,
                    adj_close: q.adjclose,
                    volume: q.volume,
                })
            })
            .collect();

        // Apply rate limiting
        sleep(self.rate_limit_delay).await;

        Ok(prices)
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}
