//! Raw rows exactly as the collector scripts write them to disk. Sentinel
//! values and stringly-typed columns are cleaned up during ingestion; the
//! cleaned shapes live in `models`.

use serde::Deserialize;

use crate::models::TrackStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct ChartRow {
    pub chart_pos: u32,
    pub track_name: String,
    pub artist_name: String,
    pub lastweek_pos: String, // "-" when the track was not on last week's chart
    pub peak_pos: u32,
    pub wks_on_chart: u32,
    pub status: TrackStatus, // "new" | "re-entry" | "no-change"
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub duration: u64, // milliseconds
    pub release_date: String,
    pub popularity: u8,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}

/// The usage dataset carries extra columns (a leading row-number column,
/// duration in minutes) that the pipeline never reads; the reader skips
/// anything not declared here.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageRow {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}
