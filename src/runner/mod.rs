pub mod exec;
pub mod types;

pub use exec::{RunOptions, run_steps};
pub use types::{Action, RunOutcome, RunnerError, RunnerResult, Step, StepResult, StepStatus};
