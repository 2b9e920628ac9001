//! Text report rendering and writing.
//!
//! After a run (normal or aborted), the accumulated step results are
//! serialized once into a timestamped text file: a header line, a creation
//! time line, one line per executed step, two extra indented lines for a
//! failed step, and a fixed footer.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::runner::types::{StepResult, StepStatus};

/// Header line of every report
pub const REPORT_HEADER: &str = "=== UI regression report ===";

/// Footer line of every report
pub const REPORT_FOOTER: &str = "Fin du test.";

/// Generate a timestamp string in YYYYMMDD_HHMMSS format
pub fn generate_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// File name for a report created at the given timestamp
pub fn report_filename(timestamp: &str) -> String {
    format!("regression_report_{}.txt", timestamp)
}

/// Render the full report text for the given results
pub fn render_report(results: &[StepResult], created_at: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str(REPORT_HEADER);
    out.push('\n');
    out.push_str(&format!(
        "Created: {}\n\n",
        created_at.format("%Y-%m-%d %H:%M:%S")
    ));

    for result in results {
        out.push_str(&format!(
            "Step {}: {} -> {}\n",
            result.index, result.description, result.status
        ));
        if result.status == StepStatus::Ko {
            if let Some(error) = &result.error {
                out.push_str(&format!("  Error: {}\n", error));
            }
            if let Some(screenshot) = &result.screenshot {
                out.push_str(&format!("  Screenshot: {}\n", screenshot.display()));
            }
        }
    }

    out.push_str(&format!("\n{}\n", REPORT_FOOTER));
    out
}

/// Write a timestamped report file into `dir` and return its path
pub fn write_report(dir: &Path, results: &[StepResult]) -> std::io::Result<PathBuf> {
    let now = Local::now();
    let path = dir.join(report_filename(&now.format("%Y%m%d_%H%M%S").to_string()));
    fs::write(&path, render_report(results, now))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn created() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn test_render_all_ok() {
        let results: Vec<StepResult> = (1..=12)
            .map(|i| StepResult::ok(i, format!("Step number {}", i)))
            .collect();

        let report = render_report(&results, created());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], REPORT_HEADER);
        assert!(lines[1].starts_with("Created: "));
        assert_eq!(lines[2], "");
        assert_eq!(report.matches("-> OK").count(), 12);
        assert_eq!(report.matches("-> KO").count(), 0);
        assert_eq!(lines[lines.len() - 1], REPORT_FOOTER);
    }

    #[test]
    fn test_render_failure_carries_error_and_screenshot() {
        let results = vec![
            StepResult::ok(1, "Click first link"),
            StepResult::ko(
                2,
                "Click login button",
                "WebDriver error [no such element]: Unable to locate element",
                Some(PathBuf::from("screenshots/error_step_2.png")),
            ),
        ];

        let report = render_report(&results, created());

        assert!(report.contains("Step 1: Click first link -> OK\n"));
        assert!(report.contains("Step 2: Click login button -> KO\n"));
        assert!(report.contains("  Error: WebDriver error [no such element]"));
        assert!(report.contains("  Screenshot: screenshots/error_step_2.png\n"));
    }

    #[test]
    fn test_render_zero_steps() {
        let report = render_report(&[], created());
        let lines: Vec<&str> = report.lines().collect();

        // Header, created line, blank separators, footer - no step lines
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], REPORT_HEADER);
        assert!(lines[1].starts_with("Created: "));
        assert_eq!(lines[4], REPORT_FOOTER);
    }

    #[test]
    fn test_write_report_creates_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![StepResult::ok(1, "Only step")];

        let path = write_report(dir.path(), &results).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("regression_report_"));
        assert!(name.ends_with(".txt"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Step 1: Only step -> OK"));
    }

    #[test]
    fn test_report_filename_format() {
        assert_eq!(
            report_filename("20240101_120000"),
            "regression_report_20240101_120000.txt"
        );
    }
}
