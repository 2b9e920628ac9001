//! The sequential step loop.
//!
//! Executes a fixed ordered list of [`Step`]s against a [`Browser`], in
//! order, halting at the first fault. Every fault is caught at the step
//! boundary: it becomes a KO result with a failure screenshot and stops the
//! loop, never the process. Nothing is retried.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config;
use crate::driver::Browser;
use crate::runner::types::{Action, RunOutcome, RunnerResult, Step, StepResult};

/// Options controlling a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory where failure screenshots are written
    pub screenshot_dir: PathBuf,
    /// Pause after each successful step, letting asynchronous page updates settle
    pub step_pause: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        let cfg = config::get();
        Self {
            screenshot_dir: PathBuf::from(&cfg.run.screenshot_dir),
            step_pause: Duration::from_millis(cfg.run.step_pause_ms),
        }
    }
}

/// Execute the steps in order, stopping at the first failure.
///
/// Returns one [`StepResult`] per executed step. Steps after the first
/// failure never execute. The only error this function itself returns is a
/// failure to create the screenshot directory; step faults are folded into
/// the outcome.
pub fn run_steps<B: Browser>(
    browser: &mut B,
    steps: &[Step],
    options: &RunOptions,
) -> RunnerResult<RunOutcome> {
    fs::create_dir_all(&options.screenshot_dir)?;

    let mut results = Vec::with_capacity(steps.len());
    let mut success = true;

    for (index, step) in steps.iter().enumerate() {
        let index = index + 1;

        let outcome = match &step.action {
            Action::Click => browser.click(&step.locator),
            Action::Fill { value } => browser.fill(&step.locator, value),
        };

        match outcome {
            Ok(()) => {
                println!("Step {} succeeded: {}", index, step.description);
                results.push(StepResult::ok(index, &step.description));
                thread::sleep(options.step_pause);
            }
            Err(fault) => {
                let screenshot = capture_failure_screenshot(browser, index, options);

                println!("Step {} failed ({}): {}", index, step.description, fault);
                if let Some(path) = &screenshot {
                    println!("Screenshot saved: {}", path.display());
                }

                results.push(StepResult::ko(
                    index,
                    &step.description,
                    fault.to_string(),
                    screenshot,
                ));
                success = false;
                break;
            }
        }
    }

    Ok(RunOutcome { success, results })
}

/// Capture the viewport to `error_step_<N>.png`.
///
/// A capture or write failure must not mask the step fault, so it degrades
/// to a warning and the KO result carries no screenshot path.
fn capture_failure_screenshot<B: Browser>(
    browser: &mut B,
    index: usize,
    options: &RunOptions,
) -> Option<PathBuf> {
    let data = match browser.screenshot() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Warning: screenshot capture failed for step {}: {}", index, e);
            return None;
        }
    };

    let path = options.screenshot_dir.join(format!("error_step_{}.png", index));
    match fs::write(&path, &data) {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!("Warning: could not write {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockBrowser;
    use crate::runner::types::StepStatus;

    fn fast_options(dir: &std::path::Path) -> RunOptions {
        RunOptions {
            screenshot_dir: dir.to_path_buf(),
            step_pause: Duration::from_millis(0),
        }
    }

    #[test]
    fn test_all_steps_succeed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = MockBrowser::new();
        let steps = vec![
            Step::click("First link", "//a[1]"),
            Step::fill("Email", "//*[@id=\"email\"]", "user@example.com"),
            Step::click("Login", "//button[1]"),
        ];

        let outcome = run_steps(&mut browser, &steps, &fast_options(dir.path())).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.results.len(), 3);
        for (i, result) in outcome.results.iter().enumerate() {
            assert_eq!(result.index, i + 1);
            assert_eq!(result.status, StepStatus::Ok);
        }
        assert_eq!(browser.screenshots_taken, 0);
    }

    #[test]
    fn test_first_failure_halts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = MockBrowser::new().fail_on("//missing", "no such element");
        let steps = vec![
            Step::click("Works", "//a[1]"),
            Step::click("Breaks", "//missing"),
            Step::click("Never runs", "//a[2]"),
        ];

        let outcome = run_steps(&mut browser, &steps, &fast_options(dir.path())).unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].status, StepStatus::Ok);

        let failure = &outcome.results[1];
        assert_eq!(failure.status, StepStatus::Ko);
        assert!(failure.error.as_deref().unwrap().contains("no such element"));

        let screenshot = failure.screenshot.as_ref().unwrap();
        assert!(screenshot.ends_with("error_step_2.png"));
        assert!(screenshot.exists());

        // Step 3 was never attempted
        assert_eq!(browser.interactions.len(), 1);
    }

    #[test]
    fn test_zero_steps() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = MockBrowser::new();

        let outcome = run_steps(&mut browser, &[], &fast_options(dir.path())).unwrap();

        assert!(outcome.success);
        assert!(outcome.results.is_empty());
    }
}
