use serde::Deserialize;

pub const REPORT_TITLE: &str = "Reader AI - Combined Report";
pub const REPORT_FILE_NAME: &str = "Report.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct ReportEntry {
    pub key: String,
    pub text: String,
}

/// One labelled block of the report, e.g. "Writing Advice". Entries keep the order they
/// arrived in.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportGroup {
    pub label: String,
    #[serde(default)]
    pub entries: Vec<ReportEntry>,
}

/// Renders the report text. Groups without entries are left out entirely.
pub fn assemble(groups: &[ReportGroup]) -> String {
    let mut report = format!("{REPORT_TITLE}\n\n");

    for group in groups.iter().filter(|g| !g.entries.is_empty()) {
        report.push_str(&format!("=== {} ===\n", group.label));
        for entry in &group.entries {
            report.push_str(&format!("\nSection {}:\n{}\n", entry.key, entry.text));
        }
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(label: &str, entries: &[(&str, &str)]) -> ReportGroup {
        ReportGroup {
            label: label.to_string(),
            entries: entries
                .iter()
                .map(|(k, t)| ReportEntry {
                    key: k.to_string(),
                    text: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_no_groups_yields_title_only() {
        assert_eq!(assemble(&[]), "Reader AI - Combined Report\n\n");
    }

    #[test]
    fn test_single_group_layout() {
        let report = assemble(&[group("Writing Advice", &[("level1", "Clear prose.")])]);
        assert_eq!(
            report,
            "Reader AI - Combined Report\n\n=== Writing Advice ===\n\nSection level1:\nClear prose.\n\n"
        );
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let report = assemble(&[
            group("Writing Advice", &[]),
            group("Marketing Strategy", &[("advertising", "Try BookBub.")]),
        ]);
        assert!(!report.contains("Writing Advice"));
        assert!(report.contains("=== Marketing Strategy ===\n\nSection advertising:\nTry BookBub.\n"));
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let report = assemble(&[group(
            "Market Insights",
            &[("positioning", "B"), ("target-audience", "A")],
        )]);
        let first = report.find("Section positioning").unwrap();
        let second = report.find("Section target-audience").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_error_placeholders_still_occupy_a_section() {
        let report = assemble(&[group(
            "Book Quality Check",
            &[("length", "Error generating analysis. Please check your connection.")],
        )]);
        assert!(report.contains("Section length:\nError generating analysis."));
    }
}
