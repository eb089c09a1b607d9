// src/render.rs
use chrono::NaiveDate;

use crate::aggregate::Summary;

pub fn render_overlap_markdown(s: &Summary, chart_date: NaiveDate) -> String {
    let mut md = String::new();
    md.push_str("# Chart Overlap Report\n\n");
    md.push_str(&format!("Chart week of {}\n\n", chart_date));

    md.push_str("## Shared Tracks\n");
    md.push_str(&format!(
        "{} chart tracks also appear in the usage dataset.\n\n",
        s.shared_count
    ));

    if !s.status_counts.is_empty() {
        md.push_str("## Chart Status Breakdown\n");
        for (status, n) in &s.status_counts {
            md.push_str(&format!("- **{}** — {}\n", status, n));
        }
        md.push('\n');
    }

    if let Some(artist) = &s.top_artist {
        md.push_str("## Top Artist\n");
        md.push_str(&format!(
            "{} has the most tracks present in both sources.\n\n",
            artist
        ));
    }

    md.push_str("## Average Lead Time\n");
    match s.avg_lead_days {
        Some(days) => md.push_str(&format!(
            "Shared tracks were released an average of {:.1} days before the chart date.\n",
            days
        )),
        None => md.push_str("Not available for this run.\n"),
    }

    md
}
