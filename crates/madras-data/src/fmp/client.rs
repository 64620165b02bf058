//! FMP API client.

use crate::error::{DataError, Result};
use crate::fmp::types::{BalanceSheetRow, CompanyData, CompanyProfile, Period};
use std::env;
use std::time::Duration;
use tracing::debug;

/// Base URL for the FMP v3 API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Request timeout for FMP calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
        })
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// Loads a local `.env` file first if one is present.
    ///
    /// # Errors
    /// Returns [`DataError::MissingApiKey`] if the variable is not set.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let api_key = env::var("FMP_API_KEY").map_err(|_| DataError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// Build a URL with the API key appended.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{}/{endpoint}&apikey={}", self.base_url, self.api_key)
        } else {
            format!("{}/{endpoint}?apikey={}", self.base_url, self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!(endpoint, "fetching from FMP");
        let response = self.client.get(self.url(endpoint)).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimit);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DataError::FmpApi(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // FMP reports bad symbols and exhausted plans inside a 200 body.
        if text.contains("\"Error Message\"") {
            return Err(DataError::FmpApi(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    /// Returns [`DataError::SymbolNotFound`] when FMP has no profile for the
    /// symbol (the API answers an empty array rather than a 404).
    pub async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let endpoint = format!("profile/{}", symbol.to_uppercase());
        let profiles: Vec<CompanyProfile> = self.get(&endpoint).await?;
        profiles
            .into_iter()
            .next()
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
    }

    /// Get balance-sheet statements for a symbol, most recent first.
    pub async fn balance_sheets(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<BalanceSheetRow>> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        let endpoint = format!(
            "balance-sheet-statement/{}?period={}{}",
            symbol.to_uppercase(),
            period.as_str(),
            limit_param
        );
        self.get(&endpoint).await
    }

    /// Fetch profile and annual balance sheets for a symbol in parallel.
    ///
    /// # Errors
    /// Returns [`DataError::MissingData`] when the profile exists but no
    /// balance sheets came back (e.g., a fund or a freshly listed company).
    pub async fn company_data(&self, symbol: &str, years: u32) -> Result<CompanyData> {
        let (profile, balance_sheets) = tokio::join!(
            self.company_profile(symbol),
            self.balance_sheets(symbol, Period::Annual, Some(years)),
        );

        let profile = profile?;
        let balance_sheets = balance_sheets?;

        if balance_sheets.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No balance-sheet statements returned".to_string(),
            });
        }

        Ok(CompanyData {
            profile,
            balance_sheets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key").unwrap();
        assert_eq!(
            client.url("profile/TCS"),
            "https://financialmodelingprep.com/api/v3/profile/TCS?apikey=test_key"
        );
        assert_eq!(
            client.url("balance-sheet-statement/TCS?period=annual&limit=5"),
            "https://financialmodelingprep.com/api/v3/balance-sheet-statement/TCS?period=annual&limit=5&apikey=test_key"
        );
    }

    #[test]
    fn test_bad_json_maps_to_serialization() {
        let err = serde_json::from_str::<Vec<CompanyProfile>>("not json").unwrap_err();
        assert!(matches!(DataError::from(err), DataError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_empty_symbol_rejected() {
        let client = FmpClient::new("test_key").unwrap();
        let result = client.company_profile("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));

        let result = client.balance_sheets("", Period::Annual, None).await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
