#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/madras-labs/madras/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod narrative;
pub mod report;

pub use chart::{ChartError, render_analysis_chart};
pub use export::{BalanceSheetExport, ExportError, ExportFormat, Exporter, RatioExport};
pub use narrative::rule_based_narrative;
pub use report::{AnalysisReport, NarrativeSource, ReportBuilder, ReportError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
