use serde_yaml::Value;

fn is_expression(value: &Value) -> bool {
    value
        .as_str()
        .map(|s| s.trim_start().starts_with("${{"))
        .unwrap_or(false)
}

/// Check a job's `strategy` block, including its matrix.
pub fn validate_strategy(strategy: &Value, job_name: &str, issues: &mut Vec<String>) {
    if !strategy.is_mapping() {
        issues.push(format!("Job '{}': 'strategy' must be a mapping", job_name));
        return;
    }

    if let Some(matrix) = strategy.get("matrix") {
        validate_matrix(matrix, job_name, issues);
    }

    if let Some(max_parallel) = strategy.get("max-parallel") {
        match max_parallel.as_u64() {
            Some(0) => issues.push(format!(
                "Job '{}': max-parallel must be greater than 0",
                job_name
            )),
            Some(_) => {}
            None if is_expression(max_parallel) => {}
            None => issues.push(format!(
                "Job '{}': max-parallel must be a number",
                job_name
            )),
        }
    }

    if let Some(fail_fast) = strategy.get("fail-fast") {
        if !fail_fast.is_bool() && !is_expression(fail_fast) {
            issues.push(format!("Job '{}': fail-fast must be a boolean", job_name));
        }
    }
}

pub fn validate_matrix(matrix: &Value, job_name: &str, issues: &mut Vec<String>) {
    // Matrices built with fromJSON() are only known at runtime
    if is_expression(matrix) {
        return;
    }

    let Some(matrix_map) = matrix.as_mapping() else {
        issues.push(format!("Job '{}': matrix must be a mapping", job_name));
        return;
    };

    for (key, value) in matrix_map {
        match key.as_str() {
            Some(section @ ("include" | "exclude")) => {
                validate_include_exclude(value, section, job_name, issues)
            }
            Some(name) => validate_matrix_parameter(name, value, job_name, issues),
            None => issues.push(format!(
                "Job '{}': matrix parameter names must be strings",
                job_name
            )),
        }
    }
}

fn validate_include_exclude(
    section: &Value,
    section_name: &str,
    job_name: &str,
    issues: &mut Vec<String>,
) {
    if is_expression(section) {
        return;
    }

    let Some(items) = section.as_sequence() else {
        issues.push(format!(
            "Job '{}': matrix {} must be an array of objects",
            job_name, section_name
        ));
        return;
    };

    for (index, item) in items.iter().enumerate() {
        if !item.is_mapping() {
            issues.push(format!(
                "Job '{}': matrix {} item at index {} must be an object",
                job_name, section_name, index
            ));
        }
    }
}

fn validate_matrix_parameter(
    name: &str,
    value: &Value,
    job_name: &str,
    issues: &mut Vec<String>,
) {
    let Some(seq) = value.as_sequence() else {
        if !is_expression(value) {
            issues.push(format!(
                "Job '{}': matrix parameter '{}' must be an array",
                job_name, name
            ));
        }
        return;
    };

    if seq.is_empty() {
        issues.push(format!(
            "Job '{}': matrix parameter '{}' has no values",
            job_name, name
        ));
        return;
    }

    let first_type = get_value_type(&seq[0]);
    for (i, item) in seq.iter().enumerate().skip(1) {
        let item_type = get_value_type(item);
        if item_type != first_type {
            issues.push(format!(
                "Job '{}': matrix parameter '{}' has inconsistent types: item at index {} is {}, but expected {}",
                job_name, name, i, item_type, first_type
            ));
        }
    }
}

fn get_value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged",
    }
}
