use crate::types::{ColumnList, RowRecord};

const ROW_DELIMITER: &str = "|-";
const COLUMN_DELIMITER: &str = "||";

/// Lazy iterator over the data rows of a raw wikitext document.
///
/// The markup is not schema-controlled, so chunks that do not look like data
/// rows (table headers, separator artifacts, malformed fragments) are
/// skipped, never reported as errors.
pub struct TableRows<'a> {
    chunks: std::str::Split<'a, &'static str>,
}

pub fn table_rows(raw: &str) -> TableRows<'_> {
    TableRows {
        chunks: raw.split(ROW_DELIMITER),
    }
}

impl Iterator for TableRows<'_> {
    type Item = RowRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.by_ref().find_map(parse_row_chunk)
    }
}

/// Cell boundaries may sit across line breaks (`|` at end of one line, `|`
/// opening the next), so line breaks are removed before splitting on the
/// cell delimiter.
fn parse_row_chunk(chunk: &str) -> Option<RowRecord> {
    let flat = chunk.replace('\n', "");
    let columns: ColumnList = flat
        .split(COLUMN_DELIMITER)
        .map(|cell| cell.trim().to_string())
        .collect();
    if columns.len() < 2 {
        return None;
    }

    let name = columns[0]
        .strip_prefix('|')
        .unwrap_or(&columns[0])
        .trim()
        .to_string();
    if name.is_empty() || is_header_title(&name) {
        return None;
    }

    Some(RowRecord { name, columns })
}

fn is_header_title(name: &str) -> bool {
    name.get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("title"))
}
