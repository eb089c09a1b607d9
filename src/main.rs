mod aggregate;
mod csv_types;
mod dedup;
mod error;
mod ingest;
mod matcher;
mod models;
mod normalize;
mod orchestrator;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use matcher::MatchPolicy;
use orchestrator::run_report;
use std::path::PathBuf;
use tracing::{debug, info};

/// Cross-catalog track overlap report generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Chart listing CSV (reference collection)
    #[arg(long)]
    chart: PathBuf,

    /// Catalog metadata CSV, row-aligned with the chart
    #[arg(long)]
    catalog: PathBuf,

    /// Usage dataset CSV (lookup target)
    #[arg(long)]
    usage: PathBuf,

    /// Issue date of the chart, YYYY-MM-DD
    #[arg(long)]
    chart_date: NaiveDate,

    /// Require artist agreement in addition to track name when matching
    #[arg(long)]
    strict: bool,

    /// Output directory for generated files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: String,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting chart-overlap");

    let args = Args::parse();

    // Friendlier error than a bare io::Error from the CSV reader
    for (label, path) in [
        ("chart", &args.chart),
        ("catalog", &args.catalog),
        ("usage", &args.usage),
    ] {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "{} dataset not found at {}",
                label,
                path.display()
            ));
        }
    }

    let policy = if args.strict {
        MatchPolicy::NameAndArtist
    } else {
        MatchPolicy::NameOnly
    };
    debug!(
        "Run parameters - chart_date={}, policy={:?}, output_dir={}",
        args.chart_date, policy, args.output_dir
    );

    run_report(
        &args.chart,
        &args.catalog,
        &args.usage,
        args.chart_date,
        policy,
        &args.output_dir,
    )
}
