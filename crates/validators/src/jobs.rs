use crate::{validate_reusable_workflow_reference, validate_steps, validate_strategy};
use serde_yaml::{Mapping, Value};

pub fn validate_jobs(jobs: &Value, issues: &mut Vec<String>) {
    let Value::Mapping(jobs_map) = jobs else {
        return;
    };

    if jobs_map.is_empty() {
        issues.push("'jobs' section is empty".to_string());
        return;
    }

    for (job_name, job_config) in jobs_map {
        let Some(job_name) = job_name.as_str() else {
            issues.push("Job names must be strings".to_string());
            continue;
        };

        if !job_config.is_mapping() {
            issues.push(format!("Job '{}' configuration is not a mapping", job_name));
            continue;
        }

        // Jobs calling a reusable workflow have neither runs-on nor steps
        match job_config.get("uses") {
            Some(Value::String(uses)) => {
                validate_reusable_workflow_reference(uses, job_name, issues);
            }
            Some(_) => {
                issues.push(format!("Job '{}': 'uses' must be a string", job_name));
            }
            None => validate_runner_job(job_name, job_config, issues),
        }

        validate_needs(job_name, job_config, jobs_map, issues);

        if let Some(strategy) = job_config.get("strategy") {
            validate_strategy(strategy, job_name, issues);
        }
    }
}

fn validate_runner_job(job_name: &str, job_config: &Value, issues: &mut Vec<String>) {
    if job_config.get("runs-on").is_none() {
        issues.push(format!("Job '{}' is missing 'runs-on' field", job_name));
    }

    match job_config.get("steps") {
        Some(Value::Sequence(steps)) if steps.is_empty() => {
            issues.push(format!("Job '{}' has empty 'steps' section", job_name));
        }
        Some(Value::Sequence(steps)) => validate_steps(steps, job_name, issues),
        Some(_) => {
            issues.push(format!(
                "Job '{}': 'steps' section is not a sequence",
                job_name
            ));
        }
        None => {
            issues.push(format!("Job '{}' is missing 'steps' section", job_name));
        }
    }
}

fn validate_needs(
    job_name: &str,
    job_config: &Value,
    jobs_map: &Mapping,
    issues: &mut Vec<String>,
) {
    let needs: Vec<&Value> = match job_config.get("needs") {
        Some(Value::Sequence(needs)) => needs.iter().collect(),
        Some(need @ Value::String(_)) => vec![need],
        Some(_) => {
            issues.push(format!(
                "Job '{}': 'needs' must be a job name or a list of job names",
                job_name
            ));
            return;
        }
        None => return,
    };

    for need in needs {
        match need.as_str() {
            Some(need) if need == job_name => {
                issues.push(format!("Job '{}' depends on itself", job_name));
            }
            Some(need) if !jobs_map.contains_key(need) => {
                issues.push(format!(
                    "Job '{}' depends on non-existent job '{}'",
                    job_name, need
                ));
            }
            Some(_) => {}
            None => {
                issues.push(format!(
                    "Job '{}': 'needs' entries must be job names",
                    job_name
                ));
            }
        }
    }
}
