use serde::Serialize;
use smallvec::SmallVec;

/// Inline buffer for the handful of cells a list row carries.
pub type ColumnList = SmallVec<[String; 8]>;

/// Compatibility category of a single list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ps2Classic,
    Playable,
    MinorIssues,
    MajorIssues,
    Unplayable,
    Untested,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Ps2Classic,
        Category::Playable,
        Category::MinorIssues,
        Category::MajorIssues,
        Category::Unplayable,
        Category::Untested,
    ];

    /// Label under which the category is published in the output documents.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ps2Classic => "PS2 Classic",
            Self::Playable => "Playable",
            Self::MinorIssues => "Minor Issues",
            Self::MajorIssues => "Major Issues",
            Self::Unplayable => "Unplayable",
            Self::Untested => "Untested",
        }
    }
}

/// One extracted table row: the game title plus the trimmed cells as they
/// appeared in the source, title cell included.
#[derive(Debug, Clone, Default)]
pub struct RowRecord {
    pub name: String,
    pub columns: ColumnList,
}

impl RowRecord {
    /// Text window scanned for compatibility markers: cells 1 through 3,
    /// space-joined. Markers in later cells are not inspected.
    pub fn compat_snippet(&self) -> String {
        let end = self.columns.len().min(4);
        self.columns.get(1..end).unwrap_or_default().join(" ")
    }
}

/// Aggregate counters over the whole list. Field names follow the published
/// `data.json` schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatStats {
    #[serde(rename = "PS2 Classic")]
    pub ps2_classic: u32,
    #[serde(rename = "Playable")]
    pub playable: u32,
    #[serde(rename = "Minor Issues")]
    pub minor_issues: u32,
    #[serde(rename = "Major Issues")]
    pub major_issues: u32,
    #[serde(rename = "Unplayable")]
    pub unplayable: u32,
    #[serde(rename = "Untested")]
    pub untested: u32,
}

impl CompatStats {
    pub fn bump(&mut self, category: Category) {
        *self.counter_mut(category) += 1;
    }

    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Ps2Classic => self.ps2_classic,
            Category::Playable => self.playable,
            Category::MinorIssues => self.minor_issues,
            Category::MajorIssues => self.major_issues,
            Category::Unplayable => self.unplayable,
            Category::Untested => self.untested,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    fn counter_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Ps2Classic => &mut self.ps2_classic,
            Category::Playable => &mut self.playable,
            Category::MinorIssues => &mut self.minor_issues,
            Category::MajorIssues => &mut self.major_issues,
            Category::Unplayable => &mut self.unplayable,
            Category::Untested => &mut self.untested,
        }
    }
}

/// Result of classifying a whole document: counters plus the titles that
/// matched no marker, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatReport {
    pub stats: CompatStats,
    pub untested_titles: Vec<String>,
}
