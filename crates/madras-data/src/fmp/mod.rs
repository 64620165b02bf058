//! Financial Modeling Prep (FMP) API client and response types.

pub mod client;
pub mod types;

pub use client::FmpClient;
pub use types::{BalanceSheetRow, CompanyData, CompanyProfile, Period};
