use crate::validate_action_reference;
use serde_yaml::Value;

pub fn validate_steps(steps: &[Value], job_name: &str, issues: &mut Vec<String>) {
    for (i, step) in steps.iter().enumerate() {
        let Some(step_map) = step.as_mapping() else {
            issues.push(format!(
                "Job '{}', step {}: Not a valid mapping",
                job_name,
                i + 1
            ));
            continue;
        };

        let has_uses = step_map.contains_key("uses");
        let has_run = step_map.contains_key("run");

        if !has_uses && !has_run {
            issues.push(format!(
                "Job '{}', step {}: Missing 'uses' or 'run' field",
                job_name,
                i + 1
            ));
        }

        if has_uses && has_run {
            issues.push(format!(
                "Job '{}', step {}: Contains both 'uses' and 'run' (should only use one)",
                job_name,
                i + 1
            ));
        }

        if let Some(Value::String(uses)) = step_map.get("uses") {
            validate_action_reference(uses, job_name, i, issues);
        }
    }
}
