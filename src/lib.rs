//! web-regress - Linear browser UI-regression runs over WebDriver.
//!
//! This crate provides:
//! - A blocking W3C WebDriver client (session lifecycle, XPath lookup,
//!   click/fill, viewport screenshots)
//! - A sequential step runner that halts on the first fault and captures a
//!   failure screenshot
//! - A timestamped plain-text report of per-step outcomes
//! - A built-in regression scenario against the local app builder
//!
//! # Example
//!
//! ```rust,no_run
//! use web_regress::driver::{DriverConfig, DriverSession};
//! use web_regress::runner::{RunOptions, run_steps};
//! use web_regress::{report, steps};
//!
//! let mut session = DriverSession::start(&DriverConfig::default()).unwrap();
//! session.navigate("http://localhost:3002").unwrap();
//!
//! let outcome = run_steps(&mut session, &steps::builtin_steps(), &RunOptions::default()).unwrap();
//! drop(session);
//!
//! let path = report::write_report(std::path::Path::new("."), &outcome.results).unwrap();
//! println!("Report written: {}", path.display());
//! ```

pub mod config;
pub mod driver;
pub mod report;
pub mod runner;
pub mod steps;

// Re-export driver types
pub use driver::{Browser, DriverConfig, DriverError, DriverResult, DriverSession, MockBrowser};

// Re-export runner types
pub use runner::{
    Action, RunOptions, RunOutcome, RunnerError, RunnerResult, Step, StepResult, StepStatus,
    run_steps,
};

// Re-export report helpers
pub use report::{generate_timestamp, render_report, write_report};

// Re-export the built-in scenario
pub use steps::builtin_steps;
