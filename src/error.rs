use std::path::PathBuf;

use thiserror::Error;

/// Failures of the collaborators around the classifier. The classifier
/// itself is total over any input string and has no error cases of its own.
#[derive(Debug, Error)]
pub enum CompatError {
    #[error("failed to fetch compatibility list: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
