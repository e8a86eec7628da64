use thiserror::Error;

/// Error type for the fallible construction paths of a build-info record.
///
/// Accessors never return this; a rejected write or a truncated read is
/// reported through their boolean result instead.
#[derive(Debug, Error)]
pub enum BuildInfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("content of {length} bytes does not fit a string field of capacity {capacity}")]
    ContentTooLong { capacity: usize, length: usize },
    #[error("version {component} must be < 256, got {value}")]
    VersionOutOfRange { component: &'static str, value: u64 },
    #[error("Invalid version: {0}")]
    InvalidVersion(String),
}
