use crate::rows::table_rows;
use crate::types::{Category, CompatReport};

/// One wikitext marker template and the category it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerDef {
    pub token: &'static str,
    pub category: Category,
}

/// Markers recognized in the compatibility cells. `{{ps2classic}}` denotes
/// an official re-release and overrides the rest; the others compete on
/// severity.
pub const PLAYABILITY_MARKERS: &[MarkerDef] = &[
    MarkerDef {
        token: "{{ps2classic}}",
        category: Category::Ps2Classic,
    },
    MarkerDef {
        token: "{{playable}}",
        category: Category::Playable,
    },
    MarkerDef {
        token: "{{minorissues}}",
        category: Category::MinorIssues,
    },
    MarkerDef {
        token: "{{majorissues}}",
        category: Category::MajorIssues,
    },
    MarkerDef {
        token: "{{unplayable}}",
        category: Category::Unplayable,
    },
];

/// Most severe first. Picks the winner when several issue markers share a
/// row; conflicting reports resolve to the worse outcome.
const SEVERITY_ORDER: &[Category] = &[
    Category::Unplayable,
    Category::MajorIssues,
    Category::MinorIssues,
    Category::Playable,
];

fn severity_rank(category: Category) -> Option<usize> {
    SEVERITY_ORDER.iter().position(|c| *c == category)
}

/// Classify one compatibility snippet against the marker table.
///
/// The official-release marker short-circuits before any issue marker is
/// inspected. Otherwise the most severe matching marker wins, and a snippet
/// with no marker at all is `Untested`.
pub fn classify_snippet(markers: &[MarkerDef], snippet: &str) -> Category {
    if let Some(official) = markers
        .iter()
        .find(|def| def.category == Category::Ps2Classic)
        && snippet.contains(official.token)
    {
        return Category::Ps2Classic;
    }

    let mut worst_rank: Option<usize> = None;
    for def in markers {
        if let Some(rank) = severity_rank(def.category)
            && snippet.contains(def.token)
            && worst_rank.is_none_or(|worst| rank < worst)
        {
            worst_rank = Some(rank);
        }
    }

    match worst_rank {
        Some(rank) => SEVERITY_ORDER[rank],
        None => Category::Untested,
    }
}

/// Fold every table row of a raw document into one report.
///
/// Rows are processed in document order; each accepted row increments
/// exactly one counter, and unmatched rows also record their title.
pub fn scan_document(markers: &[MarkerDef], raw: &str) -> CompatReport {
    let mut report = CompatReport::default();
    for row in table_rows(raw) {
        let category = classify_snippet(markers, &row.compat_snippet());
        report.stats.bump(category);
        if category == Category::Untested {
            report.untested_titles.push(row.name);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(snippet: &str) -> Category {
        classify_snippet(PLAYABILITY_MARKERS, snippet)
    }

    #[test]
    fn test_classify_each_marker_maps_to_its_category() {
        assert_eq!(classify("{{ps2classic}}"), Category::Ps2Classic);
        assert_eq!(classify("{{playable}}"), Category::Playable);
        assert_eq!(classify("{{minorissues}}"), Category::MinorIssues);
        assert_eq!(classify("{{majorissues}}"), Category::MajorIssues);
        assert_eq!(classify("{{unplayable}}"), Category::Unplayable);
    }

    #[test]
    fn test_classify_official_release_overrides_issue_markers() {
        assert_eq!(
            classify("{{ps2classic}} {{unplayable}}"),
            Category::Ps2Classic
        );
        assert_eq!(
            classify("{{majorissues}} {{ps2classic}}"),
            Category::Ps2Classic
        );
    }

    #[test]
    fn test_classify_worst_marker_wins() {
        assert_eq!(
            classify("{{minorissues}} {{majorissues}}"),
            Category::MajorIssues
        );
        assert_eq!(
            classify("{{playable}} {{unplayable}}"),
            Category::Unplayable
        );
        assert_eq!(
            classify("{{playable}} {{minorissues}} {{majorissues}} {{unplayable}}"),
            Category::Unplayable
        );
    }

    #[test]
    fn test_classify_no_marker_is_untested() {
        assert_eq!(classify(""), Category::Untested);
        assert_eq!(classify("some freeform note"), Category::Untested);
    }

    #[test]
    fn test_classify_marker_matching_is_case_sensitive() {
        assert_eq!(classify("{{Playable}}"), Category::Untested);
    }

    const SAMPLE: &str = "\
|-
| Title || Status || Notes
|-
| Ace Combat 04 || {{playable}} || Runs at full speed
|-
| Amplitude || {{minorissues}} {{majorissues}} || Conflicting reports
|-
| Arc the Lad || {{ps2classic}} {{unplayable}} || Official re-release
|-
| Berserk || Needs testing ||
|-
| Bloody Roar 4 || no tags here ||
";

    #[test]
    fn test_scan_document_counters_sum_to_accepted_rows() {
        let report = scan_document(PLAYABILITY_MARKERS, SAMPLE);

        // Header row is filtered; five data rows remain.
        assert_eq!(report.stats.total(), 5);
        assert_eq!(report.stats.playable, 1);
        assert_eq!(report.stats.major_issues, 1);
        assert_eq!(report.stats.ps2_classic, 1);
        assert_eq!(report.stats.untested, 2);
    }

    #[test]
    fn test_scan_document_untested_titles_keep_document_order() {
        let report = scan_document(PLAYABILITY_MARKERS, SAMPLE);
        assert_eq!(report.untested_titles, vec!["Berserk", "Bloody Roar 4"]);
    }

    #[test]
    fn test_scan_document_untested_duplicates_are_kept() {
        let raw = "|-\n| Siren || untested\n|-\n| Siren || still untested";
        let report = scan_document(PLAYABILITY_MARKERS, raw);

        assert_eq!(report.untested_titles, vec!["Siren", "Siren"]);
        assert_eq!(report.stats.untested, 2);
    }

    #[test]
    fn test_scan_document_marker_past_cell_three_is_invisible() {
        let raw = "|-\n| Game || a || b || c || {{playable}}";
        let report = scan_document(PLAYABILITY_MARKERS, raw);

        assert_eq!(report.stats.playable, 0);
        assert_eq!(report.stats.untested, 1);
        assert_eq!(report.untested_titles, vec!["Game"]);
    }

    #[test]
    fn test_scan_document_marker_in_cell_three_is_visible() {
        let raw = "|-\n| Game || a || b || {{playable}}";
        let report = scan_document(PLAYABILITY_MARKERS, raw);
        assert_eq!(report.stats.playable, 1);
    }

    #[test]
    fn test_scan_document_empty_input_yields_empty_report() {
        let report = scan_document(PLAYABILITY_MARKERS, "");
        assert_eq!(report, CompatReport::default());
    }

    #[test]
    fn test_scan_document_is_deterministic() {
        let first = scan_document(PLAYABILITY_MARKERS, SAMPLE);
        let second = scan_document(PLAYABILITY_MARKERS, SAMPLE);
        assert_eq!(first, second);
    }
}
