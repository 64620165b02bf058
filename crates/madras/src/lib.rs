#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/madras-labs/madras/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod nse;

// Re-export main types from sub-crates
pub use madras_ai as ai;
pub use madras_analysis as analysis;
pub use madras_data as data;
pub use madras_output as output;

// Re-export common universe types
pub use nse::{NiftyUniverse, NseSector, NseSymbol, Universe};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
