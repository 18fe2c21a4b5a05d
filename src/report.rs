//! Markdown Report Generator Module
//! Writes the analysis summary as a markdown file next to the chart.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::stats::SummaryStats;

/// File name of the markdown report inside the output directory.
pub const REPORT_FILE_NAME: &str = "polling_places_analysis_report.md";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Generates the markdown analysis report.
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Write the counts table and summary statistics to
    /// `<output_dir>/polling_places_analysis_report.md`.
    ///
    /// The directory is created if absent and an existing report is
    /// overwritten.
    pub fn generate(
        counties: &[String],
        counts: &[u32],
        summary: &SummaryStats,
        output_dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(REPORT_FILE_NAME);

        let mut md = String::new();
        md.push_str("# Polling Places Analysis Report\n\n");

        md.push_str("## Polling Places per County\n\n");
        md.push_str("| County | Polling Places |\n");
        md.push_str("| --- | ---: |\n");
        for (county, count) in counties.iter().zip(counts) {
            md.push_str(&format!("| {county} | {count} |\n"));
        }
        let total: u32 = counts.iter().sum();
        md.push_str(&format!(
            "\n{} polling places across {} counties.\n\n",
            total,
            summary.count
        ));

        md.push_str("## Summary Statistics\n\n");
        md.push_str(&format!(
            "- Mean polling places per county: {}\n",
            fmt_stat(summary.mean)
        ));
        md.push_str(&format!(
            "- Median polling places per county: {}\n",
            fmt_stat(summary.median)
        ));
        md.push_str(&format!(
            "- Sample standard deviation: {}\n",
            fmt_stat(summary.std)
        ));

        fs::write(&path, md)?;
        Ok(path)
    }
}

fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsCalculator;
    use tempfile::tempdir;

    #[test]
    fn creates_report_file() {
        let dir = tempdir().unwrap();
        let counties = vec![
            "County 1".to_string(),
            "County 2".to_string(),
            "County 3".to_string(),
        ];
        let counts = [2u32, 2, 1];
        let summary = StatsCalculator::compute_summary(&[2.0, 2.0, 1.0]);

        let path =
            MarkdownReporter::generate(&counties, &counts, &summary, dir.path()).unwrap();
        assert_eq!(path, dir.path().join(REPORT_FILE_NAME));
        assert!(path.exists());

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("| County 1 | 2 |"));
        assert!(body.contains("Mean polling places per county: 1.67"));
        assert!(body.contains("Median polling places per county: 2.00"));
        assert!(body.contains("Sample standard deviation: 0.58"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn overwrites_existing_report() {
        let dir = tempdir().unwrap();
        let summary = StatsCalculator::compute_summary(&[4.0, 2.0]);

        MarkdownReporter::generate(
            &["County 1".to_string(), "County 2".to_string()],
            &[4, 2],
            &summary,
            dir.path(),
        )
        .unwrap();
        let path = MarkdownReporter::generate(
            &["County 9".to_string()],
            &[7],
            &StatsCalculator::compute_summary(&[7.0]),
            dir.path(),
        )
        .unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("County 9"));
        assert!(!body.contains("County 1"));
    }

    #[test]
    fn empty_counts_still_produce_a_report() {
        let dir = tempdir().unwrap();
        let summary = StatsCalculator::compute_summary(&[]);
        let path = MarkdownReporter::generate(&[], &[], &summary, dir.path()).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("0 polling places across 0 counties."));
        assert!(body.contains("Mean polling places per county: n/a"));
    }
}
