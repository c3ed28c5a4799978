//! Result report rendering
//!
//! Projects the per-identifier result list and aggregate statistics into a
//! grouped, human-readable report. Formatting is separated from printing so
//! tests can assert on the produced text.

use crate::core::export::BatchSummary;
use crate::domain::{ComponentId, ExportResultItem, Result};
use chrono::Local;

/// Status glyph for a successful item
const PASS: &str = "✓";

/// Status glyph for a failed item
const FAIL: &str = "✗";

/// Presentation seam for export outcomes
///
/// The orchestrator drives this trait: `render` for a completed batch,
/// `render_failure` for the single synthetic entry left behind by a
/// transport or server failure.
pub trait ReportRenderer: Send + Sync {
    /// Render the per-identifier results with the aggregate summary
    fn render(&self, results: &[ExportResultItem], summary: &BatchSummary) -> Result<()>;

    /// Render a persistent record for a failed submission
    fn render_failure(&self, message: &str) -> Result<()>;
}

/// Plain-text report renderer
///
/// Groups result items by identifier in first-occurrence order; a single
/// identifier may carry zero, one or several file entries depending on
/// which options succeeded.
#[derive(Debug, Default)]
pub struct TextReportRenderer;

impl TextReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Format a completed batch into report text
    pub fn format(&self, results: &[ExportResultItem], summary: &BatchSummary) -> String {
        let mut out = String::new();

        for (component_id, items) in group_by_component(results) {
            out.push_str(&format!("{component_id}\n"));
            for item in items {
                let glyph = if item.success { PASS } else { FAIL };
                if item.message.is_empty() {
                    out.push_str(&format!("  {glyph}\n"));
                } else {
                    out.push_str(&format!("  {glyph} {}\n", item.message));
                }
                for file in &item.files {
                    out.push_str(&format!("    {:<9} {}\n", file.kind.to_string(), file.path));
                }
            }
        }

        out.push_str(&format!(
            "\nTotal: {}  Success: {}  Failed: {}  Elapsed: {:.2}s\n",
            summary.total,
            summary.success,
            summary.failed,
            summary.elapsed_seconds()
        ));
        out
    }

    /// Format the persistent record of a failed submission
    pub fn format_failure(&self, message: &str) -> String {
        format!("{FAIL} Export failed: {message}\nNo files were generated. Resubmit when ready.\n")
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, results: &[ExportResultItem], summary: &BatchSummary) -> Result<()> {
        println!();
        println!(
            "Export report — {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        print!("{}", self.format(results, summary));
        Ok(())
    }

    fn render_failure(&self, message: &str) -> Result<()> {
        println!();
        print!("{}", self.format_failure(message));
        Ok(())
    }
}

/// Groups items by identifier, preserving first-occurrence order.
fn group_by_component(
    results: &[ExportResultItem],
) -> Vec<(&ComponentId, Vec<&ExportResultItem>)> {
    let mut groups: Vec<(&ComponentId, Vec<&ExportResultItem>)> = Vec::new();

    for item in results {
        match groups
            .iter_mut()
            .find(|(component_id, _)| *component_id == &item.component_id)
        {
            Some((_, items)) => items.push(item),
            None => groups.push((&item.component_id, vec![item])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtifactKind, ExportedFile};
    use std::time::Duration;

    fn item(id: &str, success: bool, message: &str, files: Vec<ExportedFile>) -> ExportResultItem {
        ExportResultItem {
            component_id: ComponentId::new(id).unwrap(),
            success,
            message: message.to_string(),
            files,
        }
    }

    fn file(kind: ArtifactKind, path: &str) -> ExportedFile {
        ExportedFile {
            kind,
            path: path.to_string(),
        }
    }

    #[test]
    fn test_report_groups_under_component_id() {
        let results = vec![item(
            "C12345",
            true,
            "ok",
            vec![file(ArtifactKind::Symbol, "/lib/C12345.kicad_sym")],
        )];
        let summary = BatchSummary::from_results(&results, Duration::from_secs(1));

        let text = TextReportRenderer::new().format(&results, &summary);

        assert!(text.contains("C12345\n"));
        assert!(text.contains("✓ ok"));
        assert!(text.contains("symbol"));
        assert!(text.contains("/lib/C12345.kicad_sym"));
        assert!(text.contains("Total: 1  Success: 1  Failed: 0"));
    }

    #[test]
    fn test_report_merges_repeated_identifiers() {
        let results = vec![
            item(
                "C11111",
                true,
                "",
                vec![file(ArtifactKind::Symbol, "/lib/a.kicad_sym")],
            ),
            item("C22222", false, "not found", vec![]),
            item(
                "C11111",
                true,
                "",
                vec![file(ArtifactKind::Footprint, "/lib/a.kicad_mod")],
            ),
        ];
        let summary = BatchSummary::from_results(&results, Duration::from_secs(2));

        let text = TextReportRenderer::new().format(&results, &summary);

        // one group header per identifier, first-occurrence order
        assert_eq!(text.matches("C11111\n").count(), 1);
        let first = text.find("C11111").unwrap();
        let second = text.find("C22222").unwrap();
        assert!(first < second);
        // both files land under the one C11111 group
        assert!(text.contains("/lib/a.kicad_sym"));
        assert!(text.contains("/lib/a.kicad_mod"));
        assert!(text.contains("✗ not found"));
    }

    #[test]
    fn test_item_without_files_still_shows_status() {
        let results = vec![item("C33333", false, "export failed", vec![])];
        let summary = BatchSummary::from_results(&results, Duration::ZERO);

        let text = TextReportRenderer::new().format(&results, &summary);
        assert!(text.contains("✗ export failed"));
    }

    #[test]
    fn test_elapsed_seconds_formatted_with_two_decimals() {
        let summary = BatchSummary::from_results(&[], Duration::from_millis(1234));
        let text = TextReportRenderer::new().format(&[], &summary);
        assert!(text.contains("Elapsed: 1.23s"));
    }

    #[test]
    fn test_failure_record_carries_message() {
        let text = TextReportRenderer::new().format_failure("bad id");
        assert!(text.contains("✗ Export failed: bad id"));
        assert!(text.contains("No files were generated"));
    }
}
