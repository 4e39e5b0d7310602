use once_cell::sync::Lazy;
use regex::Regex;

// owner/repo[/path]@ref
static REMOTE_ACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+(/[^@\s]+)?@[^@\s]+$")
        .expect("action reference pattern is valid")
});

// owner/repo/path/to/workflow.yml@ref
static REMOTE_WORKFLOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+/[^@\s]+\.ya?ml@[^@\s]+$")
        .expect("reusable workflow pattern is valid")
});

/// Check the `uses:` value of a step. At most one issue is reported per reference.
pub fn validate_action_reference(
    action_ref: &str,
    job_name: &str,
    step_idx: usize,
    issues: &mut Vec<String>,
) {
    let step = step_idx + 1;

    if action_ref.starts_with("./") {
        return;
    }

    if let Some(image) = action_ref.strip_prefix("docker://") {
        if image.trim().is_empty() {
            issues.push(format!(
                "Job '{}', step {}: Docker action '{}' is missing an image",
                job_name, step, action_ref
            ));
        }
        return;
    }

    if !action_ref.contains('/') {
        issues.push(format!(
            "Job '{}', step {}: Invalid action reference format '{}'",
            job_name, step, action_ref
        ));
    } else if !action_ref.contains('@') {
        issues.push(format!(
            "Job '{}', step {}: Action '{}' is missing version tag (@v2, @main, etc.)",
            job_name, step, action_ref
        ));
    } else if !REMOTE_ACTION.is_match(action_ref) {
        issues.push(format!(
            "Job '{}', step {}: Action '{}' has invalid version/ref format",
            job_name, step, action_ref
        ));
    }
}

/// Check the `uses:` value of a job that calls a reusable workflow.
pub fn validate_reusable_workflow_reference(
    workflow_ref: &str,
    job_name: &str,
    issues: &mut Vec<String>,
) {
    if workflow_ref.starts_with("./") || REMOTE_WORKFLOW.is_match(workflow_ref) {
        return;
    }

    issues.push(format!(
        "Job '{}': Invalid reusable workflow reference format '{}'",
        job_name, workflow_ref
    ));
}
