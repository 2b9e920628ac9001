use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The interaction a step performs on its target element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Click the element
    Click,
    /// Clear the element, then type the literal value
    Fill {
        /// Text to enter after clearing
        value: String,
    },
}

/// One scripted user interaction: a described action against an XPath locator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Human-readable description (appears in console output and the report)
    pub description: String,

    /// XPath expression identifying the target element
    pub locator: String,

    /// Interaction to perform
    #[serde(flatten)]
    pub action: Action,
}

impl Step {
    /// Create a click step
    pub fn click(description: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            locator: locator.into(),
            action: Action::Click,
        }
    }

    /// Create a fill step
    pub fn fill(
        description: impl Into<String>,
        locator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            locator: locator.into(),
            action: Action::Fill {
                value: value.into(),
            },
        }
    }
}

/// Outcome status of one executed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    /// Step executed without a fault
    #[serde(rename = "OK")]
    Ok,
    /// Step raised a fault and halted the run
    #[serde(rename = "KO")]
    Ko,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatus::Ok => write!(f, "OK"),
            StepStatus::Ko => write!(f, "KO"),
        }
    }
}

/// Recorded outcome of one executed step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// 1-based position of the step in the run
    pub index: usize,

    /// Description copied from the step
    pub description: String,

    /// OK or KO
    pub status: StepStatus,

    /// Error text (KO only)
    pub error: Option<String>,

    /// Path to the failure screenshot, when one was captured (KO only)
    pub screenshot: Option<PathBuf>,
}

impl StepResult {
    /// Build a success result for a step
    pub fn ok(index: usize, description: impl Into<String>) -> Self {
        Self {
            index,
            description: description.into(),
            status: StepStatus::Ok,
            error: None,
            screenshot: None,
        }
    }

    /// Build a failure result for a step
    pub fn ko(
        index: usize,
        description: impl Into<String>,
        error: impl Into<String>,
        screenshot: Option<PathBuf>,
    ) -> Self {
        Self {
            index,
            description: description.into(),
            status: StepStatus::Ko,
            error: Some(error.into()),
            screenshot,
        }
    }
}

/// Result of a complete regression run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Whether every step completed without a fault
    pub success: bool,

    /// One result per executed step, in step order
    pub results: Vec<StepResult>,
}

/// Result type for runner operations
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors raised outside the per-step fault boundary (artifact I/O)
#[derive(Debug)]
pub enum RunnerError {
    /// I/O error writing an artifact
    Io(std::io::Error),
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunnerError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RunnerError {
    fn from(err: std::io::Error) -> Self {
        RunnerError::Io(err)
    }
}
