use std::path::Path;

use tracing_subscriber::EnvFilter;

use ps2compat::fetch::{COMPAT_LIST_URL, fetch_client, fetch_document};
use ps2compat::writer::write_report;
use ps2compat::{Category, CompatError, PLAYABILITY_MARKERS, scan_document};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run() {
        tracing::error!(%error, "run aborted");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CompatError> {
    let client = fetch_client()?;
    let raw = fetch_document(&client, COMPAT_LIST_URL)?;

    let report = scan_document(PLAYABILITY_MARKERS, &raw);
    write_report(&report, chrono::Utc::now(), Path::new("."))?;

    let summary = Category::ALL
        .iter()
        .map(|category| format!("{}={}", category.label(), report.stats.count(*category)))
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(
        total = report.stats.total(),
        untested = report.untested_titles.len(),
        %summary,
        "compatibility list classified"
    );
    Ok(())
}
