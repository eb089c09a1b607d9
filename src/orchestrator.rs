use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, error, info};

use crate::aggregate::summarize;
use crate::dedup::{dedup_catalog, dedup_usage};
use crate::error::PipelineError;
use crate::ingest::{load_catalog, load_chart, load_usage};
use crate::matcher::{match_shared, MatchPolicy};
use crate::render::render_overlap_markdown;

pub fn run_report(
    chart_path: &Path,
    catalog_path: &Path,
    usage_path: &Path,
    chart_date: NaiveDate,
    policy: MatchPolicy,
    output_dir: &str,
) -> Result<()> {
    let pipeline_start = std::time::Instant::now();
    info!(
        "Pipeline started - chart_date={}, policy={:?}, output_dir={}",
        chart_date, policy, output_dir
    );

    // 1) load the three collections
    let load_start = std::time::Instant::now();
    let chart = load_chart(chart_path)?;
    let catalog = load_catalog(catalog_path)?;
    let usage = load_usage(usage_path)?;
    info!(
        "Dataset load completed - duration={:.2}s, chart={}, catalog={}, usage={}",
        load_start.elapsed().as_secs_f32(),
        chart.len(),
        catalog.len(),
        usage.len()
    );

    // 2) nothing meaningful can come out of an empty or misaligned reference
    if chart.is_empty() {
        error!("Chart collection is empty - path={}", chart_path.display());
        return Err(PipelineError::EmptyChart.into());
    }
    if chart.len() != catalog.len() {
        error!(
            "Row alignment broken - chart={}, catalog={}",
            chart.len(),
            catalog.len()
        );
        return Err(PipelineError::MisalignedCollections {
            chart: chart.len(),
            catalog: catalog.len(),
        }
        .into());
    }

    // 3) dedup. The matcher keeps the raw catalog (row-aligned with the
    // chart) and looks tracks up in the deduplicated usage set.
    let dedup_start = std::time::Instant::now();
    let catalog_unique = dedup_catalog(catalog.clone());
    let usage_unique = dedup_usage(usage);
    info!(
        "Deduplication completed - duration={:.2}s, catalog={}, usage={}",
        dedup_start.elapsed().as_secs_f32(),
        catalog_unique.len(),
        usage_unique.len()
    );

    // 4) join chart and usage, carrying the catalog record for each hit
    let match_start = std::time::Instant::now();
    let outcome = match_shared(&chart, &catalog, &usage_unique, policy);
    info!(
        "Matching stage completed - duration={:.2}s, shared={}/{}",
        match_start.elapsed().as_secs_f32(),
        outcome.shared.len(),
        chart.len()
    );

    // 5) summary statistics
    let summary = summarize(&outcome.shared, &outcome.artist_tally, chart_date);
    if let Some(artist) = &summary.top_artist {
        info!("Top artist across both sources - {}", artist);
    }

    // 6) render the report
    let report_md = render_overlap_markdown(&summary, chart_date);

    // 7) persist to a date-scoped directory
    let persist_start = std::time::Instant::now();
    let date_dir = Path::new(output_dir).join(chart_date.to_string());
    std::fs::create_dir_all(&date_dir)?;
    debug!("Output directory: {}", date_dir.display());

    std::fs::write(
        date_dir.join("catalog.dedup.json"),
        serde_json::to_vec_pretty(&catalog_unique)?,
    )?;
    debug!("Wrote catalog.dedup.json");

    std::fs::write(
        date_dir.join("usage.dedup.json"),
        serde_json::to_vec_pretty(&usage_unique)?,
    )?;
    debug!("Wrote usage.dedup.json");

    std::fs::write(
        date_dir.join("shared_tracks.json"),
        serde_json::to_vec_pretty(&outcome.shared)?,
    )?;
    debug!("Wrote shared_tracks.json");

    std::fs::write(
        date_dir.join("summary.json"),
        serde_json::to_vec_pretty(&summary)?,
    )?;
    debug!("Wrote summary.json");

    std::fs::write(date_dir.join("overlap_report.md"), report_md.as_bytes())?;
    debug!("Wrote overlap_report.md");

    info!(
        "Output persisted - duration={:.2}s, directory={}",
        persist_start.elapsed().as_secs_f32(),
        date_dir.display()
    );

    info!(
        "Pipeline completed successfully - total_duration={:.2}s, shared={}, chart={}",
        pipeline_start.elapsed().as_secs_f32(),
        outcome.shared.len(),
        chart.len()
    );
    Ok(())
}
