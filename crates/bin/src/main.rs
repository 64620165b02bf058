//! Madras CLI binary.
//!
//! Command-line interface for NSE balance-sheet analysis.

mod pipeline;

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use madras::nse::{NiftyUniverse, NseSector, NseSymbol, Universe};
use madras_analysis::{HealthAssessment, ratio_history, ratio_trends};
use madras_data::{BalanceSheetRow, FmpClient, YahooQuoteProvider};
use madras_output::{
    BalanceSheetExport, ExportFormat, Exporter, RatioExport, ReportBuilder,
    render_analysis_chart, rule_based_narrative,
};
use pipeline::{describe_fetch_error, fetch_price_context, narrative_for, prompt_for_symbol};
use std::path::PathBuf;
use std::process;
use std::time::Duration as StdDuration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "madras")]
#[command(about = "Madras: balance-sheet health analysis for NSE stocks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Report rendering, validated at argument parsing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// ASCII tables for the terminal
    Text,
    /// Markdown document
    Markdown,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a company's balance sheet
    Analyze {
        /// NSE symbol (prompted for interactively when omitted)
        symbol: Option<String>,

        /// Number of annual statements to analyze
        #[arg(long, default_value = "5")]
        years: u32,

        /// Chart output path (default <SYMBOL>_balance_sheet.png)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Skip chart rendering
        #[arg(long)]
        no_chart: bool,

        /// Summarize with an LLM instead of rule-based templates
        #[arg(long)]
        ai: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write statements to this CSV path (ratios go beside it with a _ratios suffix)
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },

    /// List NIFTY 50 constituents
    Symbols {
        /// Filter by NSE sector
        #[arg(long)]
        sector: Option<String>,

        /// List all sectors
        #[arg(long)]
        list_sectors: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbol,
            years,
            chart,
            no_chart,
            ai,
            format,
            export_csv,
        } => {
            let symbol = match symbol {
                Some(raw) => NseSymbol::parse(&raw)?,
                None => prompt_for_symbol()?,
            };
            let chart = if no_chart {
                None
            } else {
                Some(chart.unwrap_or_else(|| {
                    PathBuf::from(format!("{}_balance_sheet.png", symbol.as_plain()))
                }))
            };
            analyze_symbol(&symbol, years, chart, ai, format, export_csv).await?;
        }
        Commands::Symbols {
            sector,
            list_sectors,
        } => {
            if list_sectors {
                list_all_sectors();
            } else {
                list_symbols(sector)?;
            }
        }
    }

    Ok(())
}

async fn analyze_symbol(
    symbol: &NseSymbol,
    years: u32,
    chart: Option<PathBuf>,
    ai: bool,
    format: OutputFormat,
    export_csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = FmpClient::from_env()?;
    let universe = NiftyUniverse::new();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(StdDuration::from_millis(100));

    pb.set_message(format!("Fetching financials for {}...", symbol));
    let data = match client.company_data(symbol.as_plain(), years).await {
        Ok(data) => data,
        Err(e) => {
            pb.finish_and_clear();
            return Err(describe_fetch_error(&e, &universe).into());
        }
    };
    let rows: Vec<BalanceSheetRow> = data.chronological().into_iter().cloned().collect();
    pb.set_message(format!("Fetched {} annual statements", rows.len()));

    let history = ratio_history(symbol.as_plain(), &rows)?;
    let latest = history.last().ok_or("empty ratio history")?;
    let assessment = HealthAssessment::from_ratios(latest);
    let trends = ratio_trends(&history);

    pb.set_message(format!("Fetching quotes for {}...", symbol.to_yahoo()));
    let quotes = YahooQuoteProvider::new();
    let (latest_close, year_change) = fetch_price_context(&quotes, symbol).await;

    if ai {
        pb.set_message("Requesting AI summary...");
    }
    let (narrative, narrative_source) = narrative_for(ai, symbol, &rows, || {
        rule_based_narrative(&data.profile.company_name, latest, &assessment, &trends)
    })
    .await;
    pb.finish_and_clear();

    let sector = data
        .profile
        .sector
        .clone()
        .or_else(|| universe.sector(symbol.as_plain()).map(|s| s.name().to_string()));

    let report = ReportBuilder::new()
        .symbol(symbol.as_plain())
        .company_name(&data.profile.company_name)
        .sector(sector)
        .currency(data.profile.currency.clone())
        .market_cap(data.profile.mkt_cap)
        .price_context(latest_close, year_change)
        .ratios(history.clone())
        .assessment(assessment)
        .trends(trends)
        .narrative(narrative, narrative_source)
        .build()?;

    match format {
        OutputFormat::Text => print!("{}", report.to_ascii_table()),
        OutputFormat::Markdown => print!("{}", report.to_markdown()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = chart {
        render_analysis_chart(&path, symbol.as_plain(), &rows, &history)?;
        println!("Chart written to {}", path.display());
    }

    if let Some(path) = export_csv {
        let statements: Vec<BalanceSheetExport> =
            rows.iter().map(BalanceSheetExport::from).collect();
        statements.export_to_file(&path, ExportFormat::Csv)?;
        println!("Statements written to {}", path.display());

        let ratios_path = sibling_path(&path, "_ratios");
        let exports: Vec<RatioExport> = history
            .iter()
            .map(|r| RatioExport::from_ratios(symbol.as_plain(), r))
            .collect();
        exports.export_to_file(&ratios_path, ExportFormat::Csv)?;
        println!("Ratios written to {}", ratios_path.display());
    }

    Ok(())
}

/// Append a suffix to the file stem, keeping directory and extension.
fn sibling_path(path: &std::path::Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("export");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("csv");
    path.with_file_name(format!("{stem}{suffix}.{ext}"))
}

fn list_symbols(sector_filter: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let universe = NiftyUniverse::new();

    println!("NIFTY 50 Universe");
    println!("=================\n");

    if let Some(sector_name) = sector_filter {
        let sector = parse_sector(&sector_name)?;
        let symbols = universe.symbols_in_sector(sector);

        println!("Sector: {}", sector);
        println!("Constituents: {}\n", symbols.len());

        for symbol in symbols {
            println!("  {}", symbol);
        }
    } else {
        let sector_counts = universe.sector_counts();

        println!("Total constituents: {}\n", universe.size());
        println!("Breakdown by sector:");

        for sector in NseSector::all() {
            let count = sector_counts.get(&sector).unwrap_or(&0);
            println!("  {:32} {:3} stocks", sector.name(), count);
        }
    }

    Ok(())
}

fn list_all_sectors() {
    println!("NSE Sectors:");
    println!("============\n");

    for sector in NseSector::all() {
        println!("  {}", sector.name());
    }
}

fn parse_sector(name: &str) -> Result<NseSector, Box<dyn std::error::Error>> {
    let normalized = name.to_lowercase().replace([' ', ',', '&'], "");

    let sector = match normalized.as_str() {
        "financialservices" | "financials" | "banks" => NseSector::FinancialServices,
        "informationtechnology" | "it" | "tech" => NseSector::InformationTechnology,
        "oilgasconsumablefuels" | "oilgas" | "energy" => NseSector::OilGasConsumableFuels,
        "fastmovingconsumergoods" | "fmcg" => NseSector::FastMovingConsumerGoods,
        "automobileandautocomponents" | "automobile" | "auto" => NseSector::Automobile,
        "healthcare" | "pharma" => NseSector::Healthcare,
        "metalsmining" | "metals" => NseSector::MetalsMining,
        "construction" => NseSector::Construction,
        "constructionmaterials" | "cement" => NseSector::ConstructionMaterials,
        "power" | "utilities" => NseSector::Power,
        "telecommunication" | "telecom" => NseSector::Telecommunication,
        "consumerdurables" | "durables" => NseSector::ConsumerDurables,
        "services" => NseSector::Services,
        "chemicals" => NseSector::Chemicals,
        _ => return Err(format!("Unknown sector: {}", name).into()),
    };

    Ok(sector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_format_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["madras", "analyze", "TCS", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_values_parse() {
        let cli =
            Cli::try_parse_from(["madras", "analyze", "TCS", "--format", "markdown"]).unwrap();
        match cli.command {
            Commands::Analyze { format, .. } => assert_eq!(format, OutputFormat::Markdown),
            Commands::Symbols { .. } => panic!("expected the analyze subcommand"),
        }
    }
}
