//! NSE symbol normalization.
//!
//! Financial Modeling Prep indexes NSE listings by the bare exchange
//! symbol, while Yahoo Finance requires an `.NS` suffix. `NseSymbol`
//! holds the bare form and converts on demand.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Suffix Yahoo Finance uses for NSE listings.
const YAHOO_SUFFIX: &str = ".NS";

/// Errors from symbol parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    /// Input was empty after trimming.
    #[error("Symbol cannot be empty")]
    Empty,

    /// Input contained a character NSE symbols never use.
    #[error("Invalid character {0:?} in symbol {1:?}")]
    InvalidCharacter(char, String),
}

/// A normalized NSE ticker symbol.
///
/// Always stored uppercase and without the `.NS` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NseSymbol(String);

impl NseSymbol {
    /// Parse user input into a normalized symbol.
    ///
    /// Trims whitespace, uppercases, and strips a trailing `.NS` if
    /// present, so `" tcs.ns "` and `"TCS"` parse to the same value.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or characters NSE symbols never
    /// use. Hyphens and ampersands are valid (`BAJAJ-AUTO`, `M&M`).
    pub fn parse(raw: &str) -> Result<Self, SymbolError> {
        let mut normalized = raw.trim().to_uppercase();
        if let Some(stripped) = normalized.strip_suffix(YAHOO_SUFFIX) {
            normalized = stripped.to_string();
        }
        if normalized.is_empty() {
            return Err(SymbolError::Empty);
        }
        if let Some(bad) = normalized
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '&')))
        {
            return Err(SymbolError::InvalidCharacter(bad, normalized));
        }
        Ok(Self(normalized))
    }

    /// The bare symbol, as Financial Modeling Prep expects it.
    #[must_use]
    pub fn as_plain(&self) -> &str {
        &self.0
    }

    /// The suffixed symbol, as Yahoo Finance expects it.
    #[must_use]
    pub fn to_yahoo(&self) -> String {
        format!("{}{YAHOO_SUFFIX}", self.0)
    }
}

impl fmt::Display for NseSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NseSymbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
