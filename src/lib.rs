pub mod classify;
pub mod error;
pub mod fetch;
pub mod rows;
pub mod types;
pub mod writer;

pub use classify::{MarkerDef, PLAYABILITY_MARKERS, classify_snippet, scan_document};
pub use error::CompatError;
pub use rows::table_rows;
pub use types::{Category, CompatReport, CompatStats, RowRecord};
