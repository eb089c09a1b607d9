use serde::{Deserialize, Serialize};

/// Where a chart entry stands relative to last week's listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TrackStatus {
    New,
    ReEntry,
    NoChange,
}

impl std::fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrackStatus::New => "new",
            TrackStatus::ReEntry => "re-entry",
            TrackStatus::NoChange => "no-change",
        };
        f.write_str(s)
    }
}

/// One row of the weekly chart listing, the reference collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartEntry {
    pub chart_pos: u32, // 1-based rank
    pub track_name: String,
    pub artist_name: String,
    pub last_week_pos: Option<u32>, // None = not on last week's chart
    pub peak_pos: u32,
    pub weeks_on_chart: u32,
    pub status: TrackStatus,
}

/// Numeric audio descriptors shared by the catalog and usage sources.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AudioFeatures {
    pub danceability: f64, // [0.0, 1.0]
    pub energy: f64,       // [0.0, 1.0]
    pub key: i32,
    pub loudness: f64, // dB
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64, // BPM
}

/// A track from the streaming-service metadata source, row-aligned with the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTrack {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub duration_ms: u64,
    pub release_date: String, // "YYYY-MM-DD", parsed only for the lead-time statistic
    pub popularity: u8,       // 0-100
    #[serde(flatten)]
    pub features: AudioFeatures,
}

/// A track trending on the short-video platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageTrack {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    #[serde(flatten)]
    pub features: AudioFeatures,
}

/// A catalog track that also appears in the usage set, tagged with its chart status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedTrack {
    #[serde(flatten)]
    pub track: CatalogTrack,
    pub status: TrackStatus,
}
