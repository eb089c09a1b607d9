use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::models::{CatalogTrack, ChartEntry, SharedTrack, UsageTrack};
use crate::normalize::norm_key;

/// How strictly a chart entry must agree with a usage row to count as the
/// same track. Artist spellings differ wildly between sources, so the
/// default compares track names only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    NameOnly,
    NameAndArtist,
}

#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// One entry per matched chart row, in chart order.
    pub shared: Vec<SharedTrack>,
    /// Chart artist name (display form) -> number of matched entries.
    pub artist_tally: BTreeMap<String, u32>,
}

/// Join the chart against the usage set and emit the shared tracks.
///
/// `chart` and `catalog` are row-aligned by construction; the caller
/// validates that their lengths agree before handing them over. A chart
/// entry produces at most one shared track no matter how many usage rows
/// match it.
pub fn match_shared(
    chart: &[ChartEntry],
    catalog: &[CatalogTrack],
    usage: &[UsageTrack],
    policy: MatchPolicy,
) -> MatchOutcome {
    debug!(
        "Matching started - chart_rows={}, usage_rows={}, policy={:?}",
        chart.len(),
        usage.len(),
        policy
    );

    let usage_keys: Vec<(String, String)> = usage
        .iter()
        .map(|u| (norm_key(&u.track_name), norm_key(&u.artist_name)))
        .collect();

    let mut shared = Vec::new();
    let mut artist_tally: BTreeMap<String, u32> = BTreeMap::new();

    for (entry, cat) in chart.iter().zip(catalog) {
        let name = norm_key(&entry.track_name);
        let artist = norm_key(&entry.artist_name);

        let hit = usage_keys.iter().any(|(n, a)| match policy {
            MatchPolicy::NameOnly => *n == name,
            MatchPolicy::NameAndArtist => *n == name && *a == artist,
        });

        if hit {
            shared.push(SharedTrack {
                track: cat.clone(),
                status: entry.status,
            });
            *artist_tally.entry(entry.artist_name.clone()).or_insert(0) += 1;
        }
    }

    info!(
        "Matching completed - shared={}, artists={}",
        shared.len(),
        artist_tally.len()
    );

    MatchOutcome {
        shared,
        artist_tally,
    }
}
