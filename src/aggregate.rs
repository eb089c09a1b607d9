use std::collections::BTreeMap;

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::models::{SharedTrack, TrackStatus};

/// Summary statistics over the shared track set.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub shared_count: usize,
    pub status_counts: BTreeMap<TrackStatus, u32>,
    pub top_artist: Option<String>,
    pub avg_lead_days: Option<f64>,
}

/// Count of shared tracks per chart status.
pub fn status_counts(shared: &[SharedTrack]) -> BTreeMap<TrackStatus, u32> {
    shared
        .iter()
        .map(|t| t.status)
        .counts()
        .into_iter()
        .map(|(status, n)| (status, n as u32))
        .collect()
}

/// The artist with the most shared tracks. Ties go to the lexicographically
/// smallest name so repeated runs agree.
pub fn top_artist(tally: &BTreeMap<String, u32>) -> Option<String> {
    let mut best: Option<(&str, u32)> = None;
    for (name, &n) in tally {
        match best {
            Some((_, m)) if n <= m => {}
            _ => best = Some((name, n)),
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Average signed number of days between each shared track's release and the
/// chart date. A single malformed or missing release date fails the whole
/// statistic; a partial average would be silently wrong. Callers guard the
/// empty set (`summarize` reports it as an absent statistic).
pub fn avg_lead_days(
    shared: &[SharedTrack],
    chart_date: NaiveDate,
) -> Result<f64, PipelineError> {
    let mut total_days = 0i64;
    for t in shared {
        let released = NaiveDate::parse_from_str(&t.track.release_date, "%Y-%m-%d").map_err(
            |_| PipelineError::BadReleaseDate {
                track: t.track.track_name.clone(),
                value: t.track.release_date.clone(),
            },
        )?;
        total_days += (chart_date - released).num_days();
    }
    Ok(total_days as f64 / shared.len() as f64)
}

/// Compute every summary statistic. A lead-time failure downgrades that one
/// statistic to `None`; the rest are still reported.
pub fn summarize(
    shared: &[SharedTrack],
    artist_tally: &BTreeMap<String, u32>,
    chart_date: NaiveDate,
) -> Summary {
    let counts = status_counts(shared);
    debug!(
        "Aggregation - shared={}, statuses={}, artists={}",
        shared.len(),
        counts.len(),
        artist_tally.len()
    );

    let avg = if shared.is_empty() {
        None
    } else {
        match avg_lead_days(shared, chart_date) {
            Ok(days) => Some(days),
            Err(e) => {
                warn!("Lead-time statistic unavailable - {}", e);
                None
            }
        }
    };

    Summary {
        shared_count: shared.len(),
        status_counts: counts,
        top_artist: top_artist(artist_tally),
        avg_lead_days: avg,
    }
}
