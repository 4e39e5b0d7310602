use serde_yaml::Value;

const VALID_EVENTS: [&str; 35] = [
    "branch_protection_rule",
    "check_run",
    "check_suite",
    "create",
    "delete",
    "deployment",
    "deployment_status",
    "discussion",
    "discussion_comment",
    "fork",
    "gollum",
    "issue_comment",
    "issues",
    "label",
    "merge_group",
    "milestone",
    "page_build",
    "project",
    "project_card",
    "project_column",
    "public",
    "pull_request",
    "pull_request_review",
    "pull_request_review_comment",
    "pull_request_target",
    "push",
    "registry_package",
    "release",
    "repository_dispatch",
    "schedule",
    "status",
    "watch",
    "workflow_call",
    "workflow_dispatch",
    "workflow_run",
];

fn check_event(event: &str, issues: &mut Vec<String>) {
    if !VALID_EVENTS.contains(&event) {
        issues.push(format!("Unknown trigger event: '{}'", event));
    }
}

pub fn validate_triggers(on: &Value, issues: &mut Vec<String>) {
    match on {
        Value::String(event) => check_event(event, issues),
        Value::Sequence(events) => {
            if events.is_empty() {
                issues.push("'on' section has no events".to_string());
            }
            for event in events {
                match event.as_str() {
                    Some(event) => check_event(event, issues),
                    None => issues.push("Trigger events must be strings".to_string()),
                }
            }
        }
        Value::Mapping(event_map) => {
            if event_map.is_empty() {
                issues.push("'on' section has no events".to_string());
            }
            for (event, _) in event_map {
                match event.as_str() {
                    Some(event) => check_event(event, issues),
                    None => issues.push("Trigger events must be strings".to_string()),
                }
            }

            match event_map.get("schedule") {
                Some(Value::Sequence(schedules)) => {
                    for schedule in schedules {
                        match schedule.get("cron") {
                            Some(Value::String(cron)) => validate_cron_syntax(cron, issues),
                            _ => issues.push("Schedule is missing 'cron' expression".to_string()),
                        }
                    }
                }
                Some(_) => issues.push("'schedule' must be a sequence of cron entries".to_string()),
                None => {}
            }
        }
        _ => {
            issues.push("'on' section has invalid format".to_string());
        }
    }
}

fn validate_cron_syntax(cron: &str, issues: &mut Vec<String>) {
    let parts: Vec<&str> = cron.split_whitespace().collect();
    if parts.len() != 5 {
        issues.push(format!(
            "Invalid cron syntax '{}': should have 5 components",
            cron
        ));
    }
}
