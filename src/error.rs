use thiserror::Error;

/// Unrecoverable pipeline failures. Row-level data problems (a record missing
/// a key field) are logged and the offending rows dropped instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("chart collection is empty")]
    EmptyChart,

    #[error("chart and catalog collections are misaligned: {chart} chart rows vs {catalog} catalog rows")]
    MisalignedCollections { chart: usize, catalog: usize },

    #[error("release date {value:?} for {track:?} is not a YYYY-MM-DD date")]
    BadReleaseDate { track: String, value: String },
}
