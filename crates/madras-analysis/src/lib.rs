#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/madras-labs/madras/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod health;
pub mod ratios;
pub mod trend;

pub use error::{AnalysisError, Result};
pub use health::{
    DebtAssetsBand, EquityBand, HealthAssessment, HealthRating, LeverageBand, LiquidityBand,
};
pub use ratios::{RatioSet, ratio_history};
pub use trend::{RatioTrends, TrendDirection, ratio_trends};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
