//! Integration tests for the step runner and report writer together.

use std::fs;
use std::time::Duration;

use web_regress::driver::MockBrowser;
use web_regress::report::{REPORT_FOOTER, REPORT_HEADER, write_report};
use web_regress::runner::{RunOptions, Step, StepStatus, run_steps};

fn options(dir: &std::path::Path) -> RunOptions {
    RunOptions {
        screenshot_dir: dir.join("screenshots"),
        step_pause: Duration::from_millis(0),
    }
}

fn twelve_steps() -> Vec<Step> {
    (1..=12)
        .map(|i| {
            if i % 3 == 0 {
                Step::fill(format!("Fill field {}", i), format!("//*[@id=\"f{}\"]", i), "value")
            } else {
                Step::click(format!("Click target {}", i), format!("//a[{}]", i))
            }
        })
        .collect()
}

#[test]
fn test_full_run_all_ok() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut browser = MockBrowser::new();

    let outcome = run_steps(&mut browser, &twelve_steps(), &options(dir.path()))
        .expect("Runner failed");
    assert!(outcome.success);
    assert_eq!(outcome.results.len(), 12);

    let report_path = write_report(dir.path(), &outcome.results).expect("Report write failed");
    let report = fs::read_to_string(&report_path).expect("Report not readable");

    assert!(report.starts_with(REPORT_HEADER));
    assert_eq!(report.matches("-> OK").count(), 12);
    assert_eq!(report.matches("-> KO").count(), 0);
    assert!(report.trim_end().ends_with(REPORT_FOOTER));

    // No screenshots on a clean run
    let screenshots: Vec<_> = fs::read_dir(dir.path().join("screenshots"))
        .expect("Screenshot dir missing")
        .collect();
    assert!(screenshots.is_empty());
}

#[test]
fn test_failure_at_step_five_aborts_and_reports() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let steps = twelve_steps();
    let mut browser = MockBrowser::new().fail_on(steps[4].locator.clone(), "no such element");

    let outcome = run_steps(&mut browser, &steps, &options(dir.path())).expect("Runner failed");
    assert!(!outcome.success);
    assert_eq!(outcome.results.len(), 5);

    // Four successes in step order, then the failure as the last entry
    for (i, result) in outcome.results[..4].iter().enumerate() {
        assert_eq!(result.index, i + 1);
        assert_eq!(result.status, StepStatus::Ok);
    }
    let failure = &outcome.results[4];
    assert_eq!(failure.index, 5);
    assert_eq!(failure.status, StepStatus::Ko);

    // The screenshot exists on disk
    let screenshot = failure.screenshot.as_ref().expect("No screenshot recorded");
    assert!(screenshot.exists());
    assert!(screenshot.ends_with("error_step_5.png"));

    let report_path = write_report(dir.path(), &outcome.results).expect("Report write failed");
    let report = fs::read_to_string(&report_path).expect("Report not readable");

    assert_eq!(report.matches("-> OK").count(), 4);
    assert_eq!(report.matches("-> KO").count(), 1);
    assert!(report.contains("no such element"));
    assert!(report.contains("error_step_5.png"));

    // Steps after the failure never appear
    assert!(!report.contains("Step 6:"));
    assert!(!report.contains(&steps[5].description));
}

#[test]
fn test_zero_steps_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut browser = MockBrowser::new();

    let outcome = run_steps(&mut browser, &[], &options(dir.path())).expect("Runner failed");
    assert!(outcome.results.is_empty());

    let report_path = write_report(dir.path(), &outcome.results).expect("Report write failed");
    let report = fs::read_to_string(&report_path).expect("Report not readable");

    assert!(report.starts_with(REPORT_HEADER));
    assert!(report.trim_end().ends_with(REPORT_FOOTER));
    assert!(!report.contains("Step 1:"));
}
