/*!
 * Reporting functionality for treescript
 *
 * Renders the end-of-run summary with the tabled library: what was written,
 * which files were left out, and how to make the script executable.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::scanner::ScannerStatistics;
use crate::utils::format_file_size;

/// Everything the operator is told once a script has been generated
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output script path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Scanner statistics
    pub statistics: ScannerStatistics,
}

/// Report generator for generated scripts
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Generate the report text
    pub fn generate_report(&self, report: &ScanReport) -> String {
        let stats = &report.statistics;
        let mut sections = vec![format!(
            "✅  Folder as a file script generated at {}\n{}",
            report.output_file,
            self.create_summary_table(report)
        )];

        if !stats.skipped_binaries.is_empty() {
            sections.push(format!(
                "📋  SKIPPED BINARY FILES\n{}",
                self.create_skipped_table(stats)
            ));
        }

        if !stats.unreadable.is_empty() {
            sections.push(format!(
                "⚠️  UNREADABLE FILES\n{}",
                self.create_unreadable_table(stats)
            ));
        }

        if !stats.delimiter_collisions.is_empty() {
            let paths: Vec<String> = stats
                .delimiter_collisions
                .iter()
                .map(|p| format!("  {}", p.display()))
                .collect();
            sections.push(format!(
                "⚠️  These files contain a line reading EOF and will be truncated by the script:\n{}",
                paths.join("\n")
            ));
        }

        sections.push(format!(
            "Make the script executable with: chmod +x {}",
            report.output_file
        ));

        sections.join("\n\n")
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &report.statistics;
        let rows = vec![
            SummaryRow {
                key: "📂 Output File",
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📁 Directories",
                value: stats.directories.to_string(),
            },
            SummaryRow {
                key: "📄 Files Written",
                value: stats.files_written.to_string(),
            },
            SummaryRow {
                key: "🚫 Binaries Skipped",
                value: stats.skipped_binaries.len().to_string(),
            },
            SummaryRow {
                key: "❓ Unreadable",
                value: stats.unreadable.len().to_string(),
            },
            SummaryRow {
                key: "🙈 Ignored Entries",
                value: stats.ignored.to_string(),
            },
        ];

        styled(Table::new(rows))
    }

    fn create_skipped_table(&self, stats: &ScannerStatistics) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        let rows: Vec<SkippedRow> = stats
            .skipped_binaries
            .iter()
            .map(|file| SkippedRow {
                path: file.path.display().to_string(),
                size: format_file_size(file.size),
            })
            .collect();

        styled(Table::new(rows))
    }

    fn create_unreadable_table(&self, stats: &ScannerStatistics) -> String {
        #[derive(Tabled)]
        struct UnreadableRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<UnreadableRow> = stats
            .unreadable
            .iter()
            .map(|file| UnreadableRow {
                path: file.path.display().to_string(),
                reason: file.reason.clone(),
            })
            .collect();

        styled(Table::new(rows))
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::{SkippedFile, UnreadableFile};

    fn report(statistics: ScannerStatistics) -> ScanReport {
        ScanReport {
            output_file: "out/replicate.sh".to_string(),
            duration: Duration::from_millis(3),
            statistics,
        }
    }

    #[test]
    fn report_ends_with_chmod_hint() {
        let text = Reporter::new().generate_report(&report(ScannerStatistics::default()));
        assert!(text.contains("Folder as a file script generated at out/replicate.sh"));
        assert!(text.ends_with("Make the script executable with: chmod +x out/replicate.sh"));
        assert!(!text.contains("SKIPPED BINARY FILES"));
    }

    #[test]
    fn report_lists_skipped_and_unreadable_files() {
        let stats = ScannerStatistics {
            skipped_binaries: vec![SkippedFile {
                path: PathBuf::from("proj/logo.png"),
                size: 2048,
            }],
            unreadable: vec![UnreadableFile {
                path: PathBuf::from("proj/blob.dat"),
                reason: "stream did not contain valid UTF-8".to_string(),
            }],
            delimiter_collisions: vec![PathBuf::from("proj/heredoc.sh")],
            ..Default::default()
        };

        let text = Reporter::new().generate_report(&report(stats));
        assert!(text.contains("SKIPPED BINARY FILES"));
        assert!(text.contains("proj/logo.png"));
        assert!(text.contains("2.00 KB"));
        assert!(text.contains("proj/blob.dat"));
        assert!(text.contains("stream did not contain valid UTF-8"));
        assert!(text.contains("proj/heredoc.sh"));
    }
}
