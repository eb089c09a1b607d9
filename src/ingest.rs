use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::csv_types::{CatalogRow, ChartRow, UsageRow};
use crate::models::{AudioFeatures, CatalogTrack, ChartEntry, UsageTrack};

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        // i + 2: line numbers are 1-based and the header takes the first line
        let row: T =
            row.with_context(|| format!("Decoding line {} of {}", i + 2, path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

fn chart_entry_from_row(row: ChartRow) -> ChartEntry {
    // "-" marks a track that was not on last week's chart
    let last_week_pos = match row.lastweek_pos.trim() {
        "-" | "" => None,
        s => match s.parse() {
            Ok(pos) => Some(pos),
            Err(_) => {
                warn!(
                    "Unreadable lastweek_pos - track={:?}, value={:?}",
                    row.track_name, row.lastweek_pos
                );
                None
            }
        },
    };

    ChartEntry {
        chart_pos: row.chart_pos,
        track_name: row.track_name,
        artist_name: row.artist_name,
        last_week_pos,
        peak_pos: row.peak_pos,
        weeks_on_chart: row.wks_on_chart,
        status: row.status,
    }
}

pub fn load_chart(path: &Path) -> Result<Vec<ChartEntry>> {
    let start = std::time::Instant::now();
    debug!("Loading chart listing - path={}", path.display());

    let rows: Vec<ChartRow> = read_rows(path)?;
    let entries: Vec<ChartEntry> = rows.into_iter().map(chart_entry_from_row).collect();

    info!(
        "Chart load completed - duration={:.2}s, entries={}",
        start.elapsed().as_secs_f32(),
        entries.len()
    );
    Ok(entries)
}

pub fn load_catalog(path: &Path) -> Result<Vec<CatalogTrack>> {
    let start = std::time::Instant::now();
    debug!("Loading catalog metadata - path={}", path.display());

    let rows: Vec<CatalogRow> = read_rows(path)?;
    let tracks: Vec<CatalogTrack> = rows
        .into_iter()
        .map(|r| CatalogTrack {
            track_id: r.track_id,
            track_name: r.track_name,
            artist_name: r.artist_name,
            duration_ms: r.duration,
            release_date: r.release_date,
            popularity: r.popularity,
            features: AudioFeatures {
                danceability: r.danceability,
                energy: r.energy,
                key: r.key,
                loudness: r.loudness,
                mode: r.mode,
                speechiness: r.speechiness,
                acousticness: r.acousticness,
                instrumentalness: r.instrumentalness,
                liveness: r.liveness,
                valence: r.valence,
                tempo: r.tempo,
            },
        })
        .collect();

    info!(
        "Catalog load completed - duration={:.2}s, tracks={}",
        start.elapsed().as_secs_f32(),
        tracks.len()
    );
    Ok(tracks)
}

pub fn load_usage(path: &Path) -> Result<Vec<UsageTrack>> {
    let start = std::time::Instant::now();
    debug!("Loading usage dataset - path={}", path.display());

    let rows: Vec<UsageRow> = read_rows(path)?;
    let tracks: Vec<UsageTrack> = rows
        .into_iter()
        .map(|r| UsageTrack {
            track_id: r.track_id,
            track_name: r.track_name,
            artist_name: r.artist_name,
            features: AudioFeatures {
                danceability: r.danceability,
                energy: r.energy,
                key: r.key,
                loudness: r.loudness,
                mode: r.mode,
                speechiness: r.speechiness,
                acousticness: r.acousticness,
                instrumentalness: r.instrumentalness,
                liveness: r.liveness,
                valence: r.valence,
                tempo: r.tempo,
            },
        })
        .collect();

    info!(
        "Usage load completed - duration={:.2}s, tracks={}",
        start.elapsed().as_secs_f32(),
        tracks.len()
    );
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackStatus;

    const FEATURE_HEADER: &str =
        "danceability,energy,key,loudness,mode,speechiness,acousticness,instrumentalness,liveness,valence,tempo";
    const FEATURE_ROW: &str = "0.56,0.66,9,-5.04,1,0.15,0.33,0.0,0.1,0.69,166.93";

    #[test]
    fn chart_rows_decode_with_sentinel_last_week() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.csv");
        std::fs::write(
            &path,
            "chart_pos,track_name,artist_name,lastweek_pos,peak_pos,wks_on_chart,status\n\
             1,Good 4 U,Olivia Rodrigo,1,1,2,no-change\n\
             2,Butter,BTS,-,2,1,new\n\
             3,Deja Vu,Olivia Rodrigo,7,3,9,re-entry\n",
        )
        .unwrap();

        let entries = load_chart(&path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].last_week_pos, Some(1));
        assert_eq!(entries[1].last_week_pos, None);
        assert_eq!(entries[1].status, TrackStatus::New);
        assert_eq!(entries[2].status, TrackStatus::ReEntry);
    }

    #[test]
    fn catalog_rows_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        std::fs::write(
            &path,
            format!(
                "track_id,track_name,artist_name,duration,release_date,popularity,{}\n\
                 4ZtFan,Good 4 U,Olivia Rodrigo,178147,2021-05-14,95,{}\n",
                FEATURE_HEADER, FEATURE_ROW
            ),
        )
        .unwrap();

        let tracks = load_catalog(&path).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].duration_ms, 178_147);
        assert_eq!(tracks[0].release_date, "2021-05-14");
        assert_eq!(tracks[0].features.key, 9);
    }

    #[test]
    fn usage_reader_skips_undeclared_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.csv");
        // leading row-number column and duration_mins are not part of the model
        std::fs::write(
            &path,
            format!(
                ",track_id,track_name,artist_name,duration_mins,{}\n\
                 0,6Uj1ct,good 4 u,O. Rodrigo,2.96,{}\n",
                FEATURE_HEADER, FEATURE_ROW
            ),
        )
        .unwrap();

        let tracks = load_usage(&path).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].track_name, "good 4 u");
        assert_eq!(tracks[0].features.tempo, 166.93);
    }

    #[test]
    fn missing_required_columns_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "track_id,track_name\nabc,Something\n").unwrap();
        assert!(load_usage(&path).is_err());
    }
}
