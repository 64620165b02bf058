//! PNG chart rendering with plotters.
//!
//! One image, two panels: grouped bars for assets, liabilities, and equity
//! by fiscal year on top, ratio lines below.

use madras_analysis::RatioSet;
use madras_data::BalanceSheetRow;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No rows were supplied.
    #[error("No balance sheet rows to chart")]
    NoData,

    /// Underlying drawing failure.
    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Render(err.to_string())
    }
}

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;
const BAR_WIDTH: f64 = 0.25;

struct YearValues {
    label: String,
    assets: Option<f64>,
    liabilities: Option<f64>,
    equity: Option<f64>,
}

fn to_billions(value: Option<f64>) -> Option<f64> {
    value.map(|v| v / 1e9)
}

/// Render the two-panel analysis chart to a PNG file.
///
/// `rows` and `ratios` are expected oldest first, as produced by
/// `ratio_history`. Rows without a parseable date are skipped.
pub fn render_analysis_chart(
    path: &Path,
    symbol: &str,
    rows: &[BalanceSheetRow],
    ratios: &[RatioSet],
) -> Result<(), ChartError> {
    let years: Vec<YearValues> = rows
        .iter()
        .filter_map(|row| {
            row.fiscal_year().map(|fy| YearValues {
                label: fy.to_string(),
                assets: to_billions(row.total_assets),
                liabilities: to_billions(row.total_liabilities),
                equity: to_billions(row.total_stockholders_equity),
            })
        })
        .collect();
    if years.is_empty() {
        return Err(ChartError::NoData);
    }

    let n = years.len();
    let x_range = -0.5f64..(n as f64 - 0.5);

    let amount_max = years
        .iter()
        .flat_map(|y| [y.assets, y.liabilities, y.equity])
        .flatten()
        .fold(0.0f64, f64::max)
        .max(1.0);
    let ratio_max = ratios
        .iter()
        .flat_map(|r| {
            [
                r.current_ratio,
                r.debt_to_equity,
                r.debt_to_assets,
                r.equity_ratio,
            ]
        })
        .flatten()
        .fold(0.0f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically((HEIGHT * 6 / 10) as i32);

    let year_label = |x: &f64| -> String {
        let idx = x.round();
        if (x - idx).abs() > 0.01 || idx < 0.0 {
            return String::new();
        }
        years
            .get(idx as usize)
            .map_or_else(String::new, |y| y.label.clone())
    };

    // Upper panel: grouped bars in billions of the reporting currency.
    let mut amounts = ChartBuilder::on(&upper)
        .caption(
            format!("{symbol} Balance Sheet"),
            ("sans-serif", 26).into_font(),
        )
        .margin(10)
        .x_label_area_size(32)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range.clone(), 0f64..amount_max * 1.1)?;
    amounts
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&year_label)
        .y_desc("Billions")
        .draw()?;

    let series: [(&str, &dyn Fn(&YearValues) -> Option<f64>, RGBColor); 3] = [
        ("Total Assets", &|y| y.assets, BLUE),
        ("Total Liabilities", &|y| y.liabilities, RED),
        ("Shareholders' Equity", &|y| y.equity, GREEN),
    ];
    for (slot, (name, pick, color)) in series.into_iter().enumerate() {
        let offset = (slot as f64 - 1.5) * BAR_WIDTH;
        amounts
            .draw_series(years.iter().enumerate().filter_map(|(i, y)| {
                pick(y).map(|v| {
                    Rectangle::new(
                        [(i as f64 + offset, 0.0), (i as f64 + offset + BAR_WIDTH, v)],
                        color.filled(),
                    )
                })
            }))?
            .label(name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled()));
    }
    amounts
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Lower panel: ratio trajectories on a shared axis.
    let mut ratio_chart = ChartBuilder::on(&lower)
        .caption("Derived Ratios", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(32)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, 0f64..ratio_max * 1.1)?;
    ratio_chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&year_label)
        .y_desc("Ratio")
        .draw()?;

    let lines: [(&str, &dyn Fn(&RatioSet) -> Option<f64>, RGBColor); 4] = [
        ("Current Ratio", &|r| r.current_ratio, BLUE),
        ("Debt/Equity", &|r| r.debt_to_equity, RED),
        ("Debt/Assets", &|r| r.debt_to_assets, MAGENTA),
        ("Equity Ratio", &|r| r.equity_ratio, GREEN),
    ];
    for (name, pick, color) in lines {
        let points: Vec<(f64, f64)> = ratios
            .iter()
            .enumerate()
            .filter_map(|(i, r)| pick(r).map(|v| (i as f64, v)))
            .collect();
        if points.is_empty() {
            continue;
        }
        ratio_chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2))
            });
        ratio_chart.draw_series(
            points
                .into_iter()
                .map(|p| Circle::new(p, 3, color.filled())),
        )?;
    }
    ratio_chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, assets: f64, liabilities: f64, equity: f64) -> BalanceSheetRow {
        BalanceSheetRow {
            date: date.to_string(),
            symbol: "TCS".to_string(),
            period: "FY".to_string(),
            total_assets: Some(assets),
            total_liabilities: Some(liabilities),
            total_stockholders_equity: Some(equity),
            total_current_assets: Some(assets * 0.4),
            total_current_liabilities: Some(liabilities * 0.5),
            long_term_debt: Some(liabilities * 0.3),
            cash_and_cash_equivalents: Some(assets * 0.1),
        }
    }

    fn ratio_set(fy: i32) -> RatioSet {
        RatioSet {
            fiscal_year: fy,
            date: format!("{fy}-03-31"),
            current_ratio: Some(1.6),
            debt_to_equity: Some(0.5),
            debt_to_assets: Some(0.33),
            equity_ratio: Some(0.66),
        }
    }

    #[test]
    fn test_render_writes_png() {
        let path = std::env::temp_dir().join("madras_chart_test.png");
        let rows = vec![
            row("2022-03-31", 3.0e11, 1.0e11, 2.0e11),
            row("2023-03-31", 3.4e11, 1.1e11, 2.3e11),
            row("2024-03-31", 3.9e11, 1.2e11, 2.7e11),
        ];
        let ratios: Vec<RatioSet> = (2022..=2024).map(ratio_set).collect();

        render_analysis_chart(&path, "TCS", &rows, &ratios).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_rows_rejected() {
        let path = std::env::temp_dir().join("madras_chart_empty.png");
        let result = render_analysis_chart(&path, "TCS", &[], &[]);
        assert!(matches!(result, Err(ChartError::NoData)));
    }

    #[test]
    fn test_rows_without_dates_rejected() {
        let path = std::env::temp_dir().join("madras_chart_nodate.png");
        let mut bad = row("2024-03-31", 1.0, 1.0, 1.0);
        bad.date = "not-a-date".to_string();
        let result = render_analysis_chart(&path, "TCS", &[bad], &[]);
        assert!(matches!(result, Err(ChartError::NoData)));
    }
}
