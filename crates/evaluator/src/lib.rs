use models::ValidationResult;
use parser::workflow::{parse_workflow, workflow_name};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use validators::RuleSet;

/// Check one workflow file.
///
/// Never fails: a read error or a YAML parse error becomes the single entry
/// of `errors`, and in that case no rule is evaluated.
pub fn check_workflow(path: &Path, rules: &RuleSet) -> ValidationResult {
    let started = Instant::now();
    let mut result = ValidationResult::new(path.display().to_string());

    let workflow = match parse_workflow(path) {
        Ok(workflow) => workflow,
        Err(e) => {
            result.add_error(e.to_string());
            logging::debug(&format!("{}: {}", path.display(), e));
            return result;
        }
    };

    result.name = workflow_name(&workflow);
    result.extend_errors(rules.validate(&workflow));

    logging::debug(&format!(
        "Checked {} in {:?}: {} error(s)",
        path.display(),
        started.elapsed(),
        result.errors.len()
    ));

    result
}

/// Check every path in parallel. Results come back sorted by id regardless
/// of the order in which the checks finished.
pub fn check_workflows(paths: &[PathBuf], rules: &RuleSet) -> Vec<ValidationResult> {
    let mut results: Vec<ValidationResult> = paths
        .par_iter()
        .map(|path| check_workflow(path, rules))
        .collect();

    results.sort_by(|a, b| a.id.cmp(&b.id));
    results
}
