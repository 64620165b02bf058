//! The assembled analysis report.

use chrono::{DateTime, Utc};
use madras_analysis::{HealthAssessment, RatioSet, RatioTrends};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required builder field was not set.
    #[error("Report builder missing field: {0}")]
    MissingField(&'static str),
}

/// Where the narrative text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeSource {
    /// Fixed rule-based templates.
    RuleBased,
    /// LLM chat completion.
    Ai,
}

impl fmt::Display for NarrativeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RuleBased => "rule-based",
            Self::Ai => "AI",
        };
        write!(f, "{label}")
    }
}

/// A finished balance-sheet analysis for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Symbol being analyzed.
    pub symbol: String,
    /// Company name.
    pub company_name: String,
    /// Sector label, if known.
    pub sector: Option<String>,
    /// Reporting currency, if known.
    pub currency: Option<String>,
    /// Market capitalization, if known.
    pub market_cap: Option<f64>,
    /// Latest closing price, if quotes were fetched.
    pub latest_close: Option<f64>,
    /// Price change over the trailing year, as a fraction.
    pub year_change: Option<f64>,
    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,
    /// Per-year ratios, oldest first.
    pub ratios: Vec<RatioSet>,
    /// Threshold-band assessment of the latest year.
    pub assessment: HealthAssessment,
    /// Multi-year ratio trends.
    pub trends: RatioTrends,
    /// Narrative summary.
    pub narrative: String,
    /// Origin of the narrative text.
    pub narrative_source: NarrativeSource,
}

fn fmt_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn fmt_band<T: fmt::Display>(band: Option<T>) -> String {
    band.map_or_else(|| "n/a".to_string(), |b| b.to_string())
}

impl AnalysisReport {
    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\nBalance Sheet Analysis: {} ({})\n",
            self.company_name, self.symbol
        ));
        if let Some(sector) = &self.sector {
            output.push_str(&format!("Sector: {sector}\n"));
        }
        if let Some(cap) = self.market_cap {
            let currency = self.currency.as_deref().unwrap_or("USD");
            output.push_str(&format!("Market Cap: {:.2}B {currency}\n", cap / 1e9));
        }
        if let Some(close) = self.latest_close {
            output.push_str(&format!("Last Close: {close:.2}"));
            if let Some(change) = self.year_change {
                output.push_str(&format!(" ({:+.1}% over 1y)", change * 100.0));
            }
            output.push('\n');
        }
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str("\nDerived Ratios by Fiscal Year:\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>12} {:>14} {:>14} {:>12}\n",
            "Year", "Current", "Debt/Equity", "Debt/Assets", "Equity"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for ratios in &self.ratios {
            output.push_str(&format!(
                "{:<8} {:>12} {:>14} {:>14} {:>12}\n",
                ratios.fiscal_year,
                fmt_ratio(ratios.current_ratio),
                fmt_ratio(ratios.debt_to_equity),
                fmt_ratio(ratios.debt_to_assets),
                fmt_ratio(ratios.equity_ratio),
            ));
        }

        output.push_str(&format!(
            "\nHealth Assessment (FY{}):\n",
            self.assessment.fiscal_year
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "  Liquidity:       {}\n",
            fmt_band(self.assessment.liquidity)
        ));
        output.push_str(&format!(
            "  Leverage:        {}\n",
            fmt_band(self.assessment.leverage)
        ));
        output.push_str(&format!(
            "  Debt-to-Assets:  {}\n",
            fmt_band(self.assessment.debt_assets)
        ));
        output.push_str(&format!(
            "  Equity Base:     {}\n",
            fmt_band(self.assessment.equity)
        ));
        output.push_str(&format!(
            "  Overall Rating:  {}\n",
            self.assessment
                .rating
                .map_or_else(|| "insufficient data".to_string(), |r| r.to_string())
        ));

        output.push_str(&format!("\nSummary ({}):\n", self.narrative_source));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&self.narrative);
        output.push('\n');
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# Balance Sheet Analysis: {} ({})\n\n",
            self.company_name, self.symbol
        ));
        if let Some(sector) = &self.sector {
            output.push_str(&format!("**Sector:** {sector}\n\n"));
        }
        if let Some(cap) = self.market_cap {
            let currency = self.currency.as_deref().unwrap_or("USD");
            output.push_str(&format!("**Market Cap:** {:.2}B {currency}\n\n", cap / 1e9));
        }
        if let Some(close) = self.latest_close {
            output.push_str(&format!("**Last Close:** {close:.2}"));
            if let Some(change) = self.year_change {
                output.push_str(&format!(" ({:+.1}% over 1y)", change * 100.0));
            }
            output.push_str("\n\n");
        }

        output.push_str("## Derived Ratios\n\n");
        output.push_str("| Year | Current | Debt/Equity | Debt/Assets | Equity |\n");
        output.push_str("|------|---------|-------------|-------------|--------|\n");
        for ratios in &self.ratios {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                ratios.fiscal_year,
                fmt_ratio(ratios.current_ratio),
                fmt_ratio(ratios.debt_to_equity),
                fmt_ratio(ratios.debt_to_assets),
                fmt_ratio(ratios.equity_ratio),
            ));
        }

        output.push_str(&format!(
            "\n## Health Assessment (FY{})\n\n",
            self.assessment.fiscal_year
        ));
        output.push_str(&format!(
            "- **Liquidity:** {}\n",
            fmt_band(self.assessment.liquidity)
        ));
        output.push_str(&format!(
            "- **Leverage:** {}\n",
            fmt_band(self.assessment.leverage)
        ));
        output.push_str(&format!(
            "- **Debt-to-Assets:** {}\n",
            fmt_band(self.assessment.debt_assets)
        ));
        output.push_str(&format!(
            "- **Equity Base:** {}\n",
            fmt_band(self.assessment.equity)
        ));
        output.push_str(&format!(
            "- **Overall Rating:** {}\n",
            self.assessment
                .rating
                .map_or_else(|| "insufficient data".to_string(), |r| r.to_string())
        ));

        output.push_str(&format!("\n## Summary ({})\n\n", self.narrative_source));
        output.push_str(&self.narrative);
        output.push('\n');

        output
    }

    /// Convert report to pretty JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis: {} ({})", self.company_name, self.symbol)?;
        writeln!(f, "  Years analyzed: {}", self.ratios.len())?;
        writeln!(
            f,
            "  Overall Rating: {}",
            self.assessment
                .rating
                .map_or_else(|| "insufficient data".to_string(), |r| r.to_string())
        )?;
        Ok(())
    }
}

/// Builder for creating analysis reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    symbol: Option<String>,
    company_name: Option<String>,
    sector: Option<String>,
    currency: Option<String>,
    market_cap: Option<f64>,
    latest_close: Option<f64>,
    year_change: Option<f64>,
    ratios: Vec<RatioSet>,
    assessment: Option<HealthAssessment>,
    trends: Option<RatioTrends>,
    narrative: Option<String>,
    narrative_source: Option<NarrativeSource>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the company name.
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Set the sector label.
    pub fn sector(mut self, sector: Option<String>) -> Self {
        self.sector = sector;
        self
    }

    /// Set the reporting currency.
    pub fn currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    /// Set the market capitalization.
    pub const fn market_cap(mut self, market_cap: Option<f64>) -> Self {
        self.market_cap = market_cap;
        self
    }

    /// Set the latest closing price and trailing-year change.
    pub const fn price_context(
        mut self,
        latest_close: Option<f64>,
        year_change: Option<f64>,
    ) -> Self {
        self.latest_close = latest_close;
        self.year_change = year_change;
        self
    }

    /// Set the per-year ratios (oldest first).
    pub fn ratios(mut self, ratios: Vec<RatioSet>) -> Self {
        self.ratios = ratios;
        self
    }

    /// Set the latest-year assessment.
    pub fn assessment(mut self, assessment: HealthAssessment) -> Self {
        self.assessment = Some(assessment);
        self
    }

    /// Set the multi-year trends.
    pub fn trends(mut self, trends: RatioTrends) -> Self {
        self.trends = Some(trends);
        self
    }

    /// Set the narrative and where it came from.
    pub fn narrative(mut self, narrative: impl Into<String>, source: NarrativeSource) -> Self {
        self.narrative = Some(narrative.into());
        self.narrative_source = Some(source);
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<AnalysisReport, ReportError> {
        Ok(AnalysisReport {
            symbol: self.symbol.ok_or(ReportError::MissingField("symbol"))?,
            company_name: self
                .company_name
                .ok_or(ReportError::MissingField("company_name"))?,
            sector: self.sector,
            currency: self.currency,
            market_cap: self.market_cap,
            latest_close: self.latest_close,
            year_change: self.year_change,
            timestamp: Utc::now(),
            ratios: self.ratios,
            assessment: self
                .assessment
                .ok_or(ReportError::MissingField("assessment"))?,
            trends: self.trends.ok_or(ReportError::MissingField("trends"))?,
            narrative: self.narrative.ok_or(ReportError::MissingField("narrative"))?,
            narrative_source: self
                .narrative_source
                .ok_or(ReportError::MissingField("narrative_source"))?,
        })
    }
}
