use thiserror::Error;

/// Failures that abort the run. Everything recoverable (a missing override
/// file, a malformed round document) is handled where it occurs and never
/// surfaces here; only writing the output catalog can fail the build.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
