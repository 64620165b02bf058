#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/madras-labs/madras/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{OpenAiClient, OpenAiConfig};
pub use error::{AiError, Result};
pub use prompt::{AnalysisPrompt, build_prompt};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
