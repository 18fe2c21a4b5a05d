//! Polling Places Analysis - batch entry point.
//!
//! Loads the polling place export, cleans it, aggregates per county, prints
//! the statistics, and writes the chart and report artifacts.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use sysinfo::System;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use polling_places_analysis::charts::ChartRenderer;
use polling_places_analysis::data::{DataModeler, DatasetLoader, DEFAULT_DATASET_FILE};
use polling_places_analysis::report::MarkdownReporter;
use polling_places_analysis::stats::StatsCalculator;

#[derive(Parser, Debug)]
#[command(
    name = "polling_places_analysis",
    about = "Analyze a polling place dataset and chart counts per county"
)]
struct Args {
    /// Path to the tab-separated, UTF-16 encoded polling place dataset
    #[arg(short, long, default_value = DEFAULT_DATASET_FILE)]
    input: PathBuf,

    /// Directory receiving the chart and report artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    let start_time = Instant::now();
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    let cpu_start = sys.global_cpu_usage();

    run(&args)?;

    sys.refresh_cpu_usage();
    let cpu_end = sys.global_cpu_usage();
    println!(
        "Execution time: {:.3} seconds",
        start_time.elapsed().as_secs_f64()
    );
    println!("CPU usage: {:.2} %", cpu_end - cpu_start);

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let df_raw = DatasetLoader::new().load(&args.input)?;
    info!(rows = df_raw.height(), "dataset loaded");

    let df_clean = DataModeler::model(&df_raw)?;
    info!(rows = df_clean.height(), "records after cleaning");
    if df_clean.height() == 0 {
        warn!("no clean records survived filtering; statistics will be undefined");
    }

    let df_counts = StatsCalculator::count_per_county(&df_clean)?;
    let counties = StatsCalculator::county_names(&df_counts)?;
    let counts = StatsCalculator::count_values(&df_counts)?;
    let values: Vec<f64> = counts.iter().map(|&c| f64::from(c)).collect();
    let summary = StatsCalculator::compute_summary(&values);

    println!("Polling Places per County:\n{df_counts}\n");
    println!(
        "Mean Number of Polling Places per County: {:.2}",
        summary.mean
    );
    println!(
        "Median Number of Polling Places per County: {:.2}",
        summary.median
    );
    println!("Standard Deviation: {:.2}", summary.std);

    let chart_path = ChartRenderer::render_county_bar_chart(&counties, &counts, &args.output_dir)?;
    info!(path = %chart_path.display(), "chart written");

    let report_path =
        MarkdownReporter::generate(&counties, &counts, &summary, &args.output_dir)?;
    info!(path = %report_path.display(), "report written");

    Ok(())
}
