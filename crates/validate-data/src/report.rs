//! Turning per-file results into annotations and an exit status.

use annotations::Reporter;
use models::ValidationResult;
use std::fmt::Display;

pub const SUCCESS_MESSAGE: &str = "🎉🤘 - Found no workflows with errors!";
pub const UNHANDLED_FAILURE: &str = "Unhandled error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// `failing` counts files, not individual error messages.
    ValidationFailed {
        failing: usize,
    },
    Unhandled,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

pub fn failing(results: &[ValidationResult]) -> Vec<&ValidationResult> {
    results.iter().filter(|result| !result.is_valid()).collect()
}

pub fn report_results(results: &[ValidationResult], reporter: &mut dyn Reporter) -> Outcome {
    let failed = failing(results);

    if failed.is_empty() {
        reporter.info(SUCCESS_MESSAGE);
        return Outcome::Passed;
    }

    reporter.start_group(&format!(
        "😟 - Found {} workflows with errors:",
        failed.len()
    ));
    for workflow in &failed {
        reporter.error(&format!(
            "Errors in {} - {}",
            workflow.label(),
            workflow.errors.join(", ")
        ));
    }
    reporter.end_group();
    reporter.set_failed(&format!("Found {} workflows with errors", failed.len()));

    Outcome::ValidationFailed {
        failing: failed.len(),
    }
}

pub fn report_unhandled(error: &dyn Display, reporter: &mut dyn Reporter) -> Outcome {
    reporter.error(&format!(
        "Unhandled error while validating workflows: {}",
        error
    ));
    reporter.set_failed(UNHANDLED_FAILURE);
    Outcome::Unhandled
}
