use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, info, warn};

use crate::models::{CatalogTrack, UsageTrack};
use crate::normalize::norm_pair;

/// Keep the first occurrence of every key, preserving input order.
fn retain_first_by<T, K, F>(rows: &mut Vec<T>, mut key_of: F)
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    rows.retain(|r| seen.insert(key_of(r)));
}

fn log_removed(source: &str, before: usize, after: usize) {
    let removed = before - after;
    if removed > 0 {
        info!(
            "Deduplication ({}) - removed={} duplicates, retained={} unique tracks",
            source, removed, after
        );
    } else {
        debug!(
            "Deduplication ({}) - no duplicates found, retained={} tracks",
            source, after
        );
    }
}

/// Reduce the catalog collection to one row per identifier. A row missing a
/// key field cannot participate in matching and is dropped with a warning.
pub fn dedup_catalog(mut rows: Vec<CatalogTrack>) -> Vec<CatalogTrack> {
    let before = rows.len();
    rows.retain(|t| {
        let complete =
            !t.track_id.is_empty() && !t.track_name.is_empty() && !t.artist_name.is_empty();
        if !complete {
            warn!(
                "Dropping catalog row missing a key field - track_id={:?}, track_name={:?}",
                t.track_id, t.track_name
            );
        }
        complete
    });

    retain_first_by(&mut rows, |t| t.track_id.clone());

    log_removed("catalog", before, rows.len());
    rows
}

/// Reduce the usage collection to one row per real-world track.
pub fn dedup_usage(mut rows: Vec<UsageTrack>) -> Vec<UsageTrack> {
    let before = rows.len();
    rows.retain(|t| {
        let complete =
            !t.track_id.is_empty() && !t.track_name.is_empty() && !t.artist_name.is_empty();
        if !complete {
            warn!(
                "Dropping usage row missing a key field - track_id={:?}, track_name={:?}",
                t.track_id, t.track_name
            );
        }
        complete
    });

    // pass 1: identity dedup, repeated track_id keeps the first occurrence
    retain_first_by(&mut rows, |t| t.track_id.clone());

    // pass 2: semantic dedup, the same song released under different
    // identifiers (single vs. album) collapses to its first occurrence
    retain_first_by(&mut rows, |t| norm_pair(&t.track_name, &t.artist_name));

    log_removed("usage", before, rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AudioFeatures;

    fn usage(id: &str, name: &str, artist: &str) -> UsageTrack {
        UsageTrack {
            track_id: id.into(),
            track_name: name.into(),
            artist_name: artist.into(),
            features: AudioFeatures::default(),
        }
    }

    fn catalog(id: &str, name: &str, artist: &str, release_date: &str) -> CatalogTrack {
        CatalogTrack {
            track_id: id.into(),
            track_name: name.into(),
            artist_name: artist.into(),
            duration_ms: 178_000,
            release_date: release_date.into(),
            popularity: 80,
            features: AudioFeatures::default(),
        }
    }

    #[test]
    fn repeated_track_id_keeps_first_row() {
        let rows = vec![
            catalog("id1", "Good 4 U", "Olivia Rodrigo", "2021-05-14"),
            catalog("id1", "Good 4 U", "Olivia Rodrigo", "2021-05-21"),
            catalog("id2", "Levitating", "Dua Lipa", "2020-03-27"),
        ];
        let out = dedup_catalog(rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].release_date, "2021-05-14");
    }

    #[test]
    fn same_song_under_different_ids_collapses() {
        let rows = vec![
            usage("single", "Good 4 U", "Olivia Rodrigo"),
            usage("album", "good 4 u ", "OLIVIA RODRIGO"),
        ];
        let out = dedup_usage(rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].track_id, "single");
    }

    #[test]
    fn preserves_input_order() {
        let rows = vec![
            usage("c", "Track C", "Artist"),
            usage("a", "Track A", "Artist"),
            usage("a", "Track A", "Artist"),
            usage("b", "Track B", "Artist"),
        ];
        let ids: Vec<String> = dedup_usage(rows).into_iter().map(|t| t.track_id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn idempotent_on_own_output() {
        let rows = vec![
            usage("a", "Track A", "Artist"),
            usage("b", "track a", "artist"),
            usage("c", "Track C", "Artist"),
        ];
        let once = dedup_usage(rows);
        let twice = dedup_usage(once.clone());
        assert_eq!(once.len(), twice.len());
        let ids: Vec<&str> = twice.iter().map(|t| t.track_id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn no_duplicate_keys_after_dedup() {
        let rows = vec![
            usage("a", "Track A", "Artist"),
            usage("a", "Other", "Artist"),
            usage("b", "Track A", " ARTIST "),
            usage("c", "Track C", "Artist"),
        ];
        let out = dedup_usage(rows);
        let mut ids = HashSet::new();
        let mut pairs = HashSet::new();
        for t in &out {
            assert!(ids.insert(t.track_id.clone()));
            assert!(pairs.insert(norm_pair(&t.track_name, &t.artist_name)));
        }
    }

    #[test]
    fn rows_missing_key_fields_are_dropped() {
        let rows = vec![
            usage("", "Track A", "Artist"),
            usage("b", "", "Artist"),
            usage("c", "Track C", ""),
            usage("d", "Track D", "Artist"),
        ];
        let out = dedup_usage(rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].track_id, "d");
    }
}
