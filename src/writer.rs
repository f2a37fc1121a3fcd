use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::CompatError;
use crate::types::{CompatReport, CompatStats};

pub const STATS_FILENAME: &str = "data.json";
pub const UNTESTED_FILENAME: &str = "untested.json";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Serialize)]
struct StatsDocument<'a> {
    stats: &'a CompatStats,
    last_updated: String,
}

/// Persist the report as `data.json` and `untested.json` under `out_dir`.
///
/// Both documents are rendered before either file is touched, so a
/// serialization failure leaves no output behind.
pub fn write_report(
    report: &CompatReport,
    captured_at: DateTime<Utc>,
    out_dir: &Path,
) -> Result<(), CompatError> {
    let document = StatsDocument {
        stats: &report.stats,
        last_updated: captured_at.format(TIMESTAMP_FORMAT).to_string(),
    };
    let stats_json = serde_json::to_string_pretty(&document)?;
    let untested_json = serde_json::to_string_pretty(&report.untested_titles)?;

    write_file(&out_dir.join(STATS_FILENAME), &stats_json)?;
    write_file(&out_dir.join(UNTESTED_FILENAME), &untested_json)
}

fn write_file(path: &Path, contents: &str) -> Result<(), CompatError> {
    fs::write(path, contents).map_err(|source| CompatError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote report document");
    Ok(())
}
