//! Rule-based narrative generation.
//!
//! Fallback used when no AI summary is requested: each available band and
//! trend contributes a fixed sentence.

use madras_analysis::{
    DebtAssetsBand, EquityBand, HealthAssessment, LeverageBand, LiquidityBand, RatioSet,
    RatioTrends, TrendDirection,
};

fn liquidity_sentence(band: LiquidityBand, ratio: f64) -> String {
    match band {
        LiquidityBand::Excellent => format!(
            "Liquidity is excellent: current assets cover short-term obligations {ratio:.2}x over."
        ),
        LiquidityBand::Comfortable => format!(
            "Liquidity is comfortable with a current ratio of {ratio:.2}."
        ),
        LiquidityBand::Tight => format!(
            "Liquidity is tight: the current ratio of {ratio:.2} leaves little headroom over short-term obligations."
        ),
        LiquidityBand::Stressed => format!(
            "Liquidity is stressed: current liabilities exceed current assets (current ratio {ratio:.2})."
        ),
    }
}

fn leverage_sentence(band: LeverageBand, ratio: f64) -> String {
    match band {
        LeverageBand::Conservative => format!(
            "Leverage is conservative at {ratio:.2}x equity."
        ),
        LeverageBand::Moderate => format!(
            "Leverage is moderate: long-term debt stands at {ratio:.2}x equity."
        ),
        LeverageBand::Elevated => format!(
            "Leverage is elevated: long-term debt stands at {ratio:.2}x equity and warrants monitoring."
        ),
        LeverageBand::Aggressive => format!(
            "Leverage is aggressive at {ratio:.2}x equity, a significant solvency risk."
        ),
    }
}

fn debt_assets_sentence(band: DebtAssetsBand, ratio: f64) -> String {
    match band {
        DebtAssetsBand::Low => format!(
            "Liabilities fund a low {:.0}% of total assets.",
            ratio * 100.0
        ),
        DebtAssetsBand::Moderate => format!(
            "Liabilities fund a moderate {:.0}% of total assets.",
            ratio * 100.0
        ),
        DebtAssetsBand::High => format!(
            "Liabilities fund a high {:.0}% of total assets.",
            ratio * 100.0
        ),
    }
}

fn equity_sentence(band: EquityBand, ratio: f64) -> String {
    match band {
        EquityBand::Strong => format!(
            "The equity base is strong, backing {:.0}% of assets.",
            ratio * 100.0
        ),
        EquityBand::Adequate => format!(
            "The equity base is adequate, backing {:.0}% of assets.",
            ratio * 100.0
        ),
        EquityBand::Thin => format!(
            "The equity base is thin, backing only {:.0}% of assets.",
            ratio * 100.0
        ),
    }
}

fn trend_sentence(name: &str, direction: TrendDirection, rising_is_good: bool) -> Option<String> {
    let verdict = match (direction, rising_is_good) {
        (TrendDirection::Flat, _) => return None,
        (TrendDirection::Rising, true) | (TrendDirection::Falling, false) => "improved",
        (TrendDirection::Rising, false) | (TrendDirection::Falling, true) => "deteriorated",
    };
    let movement = match direction {
        TrendDirection::Rising => "risen",
        TrendDirection::Falling => "fallen",
        TrendDirection::Flat => unreachable!(),
    };
    Some(format!(
        "Over the analysis window the {name} has {movement}, so this measure has {verdict}."
    ))
}

/// Compose a narrative from the latest ratios, their bands, and the trends.
///
/// Only computable ratios contribute sentences; with no data at all the
/// narrative says so explicitly.
#[must_use]
pub fn rule_based_narrative(
    company: &str,
    latest: &RatioSet,
    assessment: &HealthAssessment,
    trends: &RatioTrends,
) -> String {
    let mut sentences = Vec::new();

    if let (Some(band), Some(ratio)) = (assessment.liquidity, latest.current_ratio) {
        sentences.push(liquidity_sentence(band, ratio));
    }
    if let (Some(band), Some(ratio)) = (assessment.leverage, latest.debt_to_equity) {
        sentences.push(leverage_sentence(band, ratio));
    }
    if let (Some(band), Some(ratio)) = (assessment.debt_assets, latest.debt_to_assets) {
        sentences.push(debt_assets_sentence(band, ratio));
    }
    if let (Some(band), Some(ratio)) = (assessment.equity, latest.equity_ratio) {
        sentences.push(equity_sentence(band, ratio));
    }

    if sentences.is_empty() {
        return format!(
            "Insufficient balance-sheet data to assess {company} for FY{}.",
            assessment.fiscal_year
        );
    }

    if let Some(direction) = trends.current_ratio {
        sentences.extend(trend_sentence("current ratio", direction, true));
    }
    if let Some(direction) = trends.debt_to_equity {
        sentences.extend(trend_sentence("debt-to-equity ratio", direction, false));
    }
    if let Some(direction) = trends.equity_ratio {
        sentences.extend(trend_sentence("equity ratio", direction, true));
    }

    if let Some(rating) = assessment.rating {
        sentences.push(format!(
            "Overall, {company}'s FY{} balance sheet rates as {rating}.",
            assessment.fiscal_year
        ));
    }

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use madras_analysis::ratio_trends;

    fn ratios(
        fy: i32,
        current: Option<f64>,
        leverage: Option<f64>,
        debt_assets: Option<f64>,
        equity: Option<f64>,
    ) -> RatioSet {
        RatioSet {
            fiscal_year: fy,
            date: format!("{fy}-03-31"),
            current_ratio: current,
            debt_to_equity: leverage,
            debt_to_assets: debt_assets,
            equity_ratio: equity,
        }
    }

    #[test]
    fn test_healthy_narrative() {
        let history = vec![
            ratios(2022, Some(1.6), Some(0.4), Some(0.3), Some(0.6)),
            ratios(2023, Some(2.0), Some(0.3), Some(0.28), Some(0.65)),
        ];
        let latest = history.last().unwrap();
        let assessment = HealthAssessment::from_ratios(latest);
        let trends = ratio_trends(&history);

        let text = rule_based_narrative("Infosys", latest, &assessment, &trends);
        assert!(text.contains("Liquidity is excellent"));
        assert!(text.contains("Leverage is conservative"));
        assert!(text.contains("equity base is strong"));
        assert!(text.contains("rates as Strong"));
        // Falling debt-to-equity reads as an improvement.
        assert!(text.contains("debt-to-equity ratio has fallen, so this measure has improved"));
    }

    #[test]
    fn test_stressed_narrative() {
        let latest = ratios(2024, Some(0.6), Some(2.5), Some(0.8), Some(0.1));
        let assessment = HealthAssessment::from_ratios(&latest);
        let trends = ratio_trends(std::slice::from_ref(&latest));

        let text = rule_based_narrative("Acme", &latest, &assessment, &trends);
        assert!(text.contains("Liquidity is stressed"));
        assert!(text.contains("Leverage is aggressive"));
        assert!(text.contains("equity base is thin"));
        assert!(text.contains("rates as Critical"));
    }

    #[test]
    fn test_leverage_sentences_name_long_term_debt() {
        let latest = ratios(2024, None, Some(0.8), None, None);
        let assessment = HealthAssessment::from_ratios(&latest);
        let trends = ratio_trends(std::slice::from_ref(&latest));

        let text = rule_based_narrative("Acme", &latest, &assessment, &trends);
        assert!(text.contains("long-term debt stands at 0.80x equity"));
    }

    #[test]
    fn test_no_data() {
        let latest = ratios(2024, None, None, None, None);
        let assessment = HealthAssessment::from_ratios(&latest);
        let trends = ratio_trends(std::slice::from_ref(&latest));

        let text = rule_based_narrative("Acme", &latest, &assessment, &trends);
        assert_eq!(
            text,
            "Insufficient balance-sheet data to assess Acme for FY2024."
        );
    }

    #[test]
    fn test_flat_trends_add_no_sentence() {
        let latest = ratios(2024, Some(1.2), None, None, None);
        let assessment = HealthAssessment::from_ratios(&latest);
        let trends = ratio_trends(std::slice::from_ref(&latest));

        let text = rule_based_narrative("Acme", &latest, &assessment, &trends);
        assert!(!text.contains("analysis window"));
    }
}
