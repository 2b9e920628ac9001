//! Browser abstraction for driving UI interactions.
//!
//! The step runner is written against the [`Browser`] trait so the same loop
//! can drive a live [`DriverSession`] or the scripted [`MockBrowser`] used in
//! tests.

use std::collections::HashMap;

use super::session::DriverSession;
use super::types::{DriverError, DriverResult};

/// Trait for anything that can execute UI interactions against a page
pub trait Browser {
    /// Locate the element identified by `locator` and click it
    fn click(&mut self, locator: &str) -> DriverResult<()>;

    /// Locate the element identified by `locator`, clear it, then type `value`
    fn fill(&mut self, locator: &str, value: &str) -> DriverResult<()>;

    /// Capture a PNG screenshot of the current viewport
    fn screenshot(&mut self) -> DriverResult<Vec<u8>>;
}

impl Browser for DriverSession {
    fn click(&mut self, locator: &str) -> DriverResult<()> {
        let element = self.find_element(locator)?;
        DriverSession::click(self, &element)
    }

    fn fill(&mut self, locator: &str, value: &str) -> DriverResult<()> {
        let element = self.find_element(locator)?;
        self.clear(&element)?;
        self.send_keys(&element, value)
    }

    fn screenshot(&mut self) -> DriverResult<Vec<u8>> {
        DriverSession::screenshot(self)
    }
}

/// Minimal PNG header used as canned screenshot bytes
const MOCK_PNG: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// A scripted browser double for testing the step runner.
///
/// Interactions succeed unless the locator has been registered as failing.
/// Every interaction is recorded so tests can assert that execution stopped
/// at the right step.
#[derive(Debug, Default)]
pub struct MockBrowser {
    /// Locator -> WebDriver error code to raise
    failures: HashMap<String, String>,
    /// Ordered log of (locator, typed value if any)
    pub interactions: Vec<(String, Option<String>)>,
    /// Number of screenshots taken
    pub screenshots_taken: usize,
}

impl MockBrowser {
    /// Create a mock where every interaction succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locator whose interaction fails with the given error code
    pub fn fail_on(mut self, locator: impl Into<String>, error: impl Into<String>) -> Self {
        self.failures.insert(locator.into(), error.into());
        self
    }

    fn check(&mut self, locator: &str, value: Option<&str>) -> DriverResult<()> {
        if let Some(error) = self.failures.get(locator) {
            return Err(DriverError::Protocol {
                error: error.clone(),
                message: format!("mock failure for locator {}", locator),
            });
        }
        self.interactions
            .push((locator.to_string(), value.map(|v| v.to_string())));
        Ok(())
    }
}

impl Browser for MockBrowser {
    fn click(&mut self, locator: &str) -> DriverResult<()> {
        self.check(locator, None)
    }

    fn fill(&mut self, locator: &str, value: &str) -> DriverResult<()> {
        self.check(locator, Some(value))
    }

    fn screenshot(&mut self) -> DriverResult<Vec<u8>> {
        self.screenshots_taken += 1;
        Ok(MOCK_PNG.to_vec())
    }
}
