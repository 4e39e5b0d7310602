use crate::{validate_jobs, validate_triggers};
use parser::schema::SchemaValidator;
use serde_yaml::Value;
use std::fmt;
use thiserror::Error;

/// Ids accepted by [`builtin_rule`], in their canonical evaluation order.
pub const BUILTIN_RULES: [&str; 3] = ["name", "triggers", "jobs"];

/// Rules enabled when the settings do not list any.
pub const DEFAULT_RULES: [&str; 2] = ["triggers", "jobs"];

pub const NOT_A_MAPPING: &str = "Workflow file is not a valid YAML mapping";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown rule '{0}' (known rules: {known})", known = BUILTIN_RULES.join(", "))]
pub struct UnknownRuleError(pub String);

/// A semantic check over a parsed workflow document.
///
/// Rules only ever see mappings; [`RuleSet::validate`] handles every other
/// document shape itself.
pub trait Rule: Send + Sync {
    fn id(&self) -> &str;

    /// Return one message per violation, in the order they were found.
    fn validate(&self, workflow: &Value) -> Vec<String>;
}

pub struct NameRule;

impl Rule for NameRule {
    fn id(&self) -> &str {
        "name"
    }

    fn validate(&self, workflow: &Value) -> Vec<String> {
        match workflow.get("name") {
            None => vec!["Workflow is missing a name".to_string()],
            Some(Value::String(_)) => Vec::new(),
            Some(_) => vec!["Workflow name must be a string".to_string()],
        }
    }
}

pub struct TriggersRule;

impl Rule for TriggersRule {
    fn id(&self) -> &str {
        "triggers"
    }

    fn validate(&self, workflow: &Value) -> Vec<String> {
        let mut issues = Vec::new();
        match workflow.get("on") {
            Some(on) => validate_triggers(on, &mut issues),
            None => issues.push("Workflow is missing 'on' section (triggers)".to_string()),
        }
        issues
    }
}

pub struct JobsRule;

impl Rule for JobsRule {
    fn id(&self) -> &str {
        "jobs"
    }

    fn validate(&self, workflow: &Value) -> Vec<String> {
        let mut issues = Vec::new();
        match workflow.get("jobs") {
            Some(jobs) if jobs.is_mapping() => validate_jobs(jobs, &mut issues),
            Some(_) => issues.push("'jobs' section is not a mapping".to_string()),
            None => issues.push("Workflow is missing 'jobs' section".to_string()),
        }
        issues
    }
}

/// Checks documents against a user-supplied JSON Schema.
pub struct SchemaRule {
    validator: SchemaValidator,
}

impl SchemaRule {
    pub fn new(validator: SchemaValidator) -> Self {
        SchemaRule { validator }
    }
}

impl Rule for SchemaRule {
    fn id(&self) -> &str {
        "schema"
    }

    fn validate(&self, workflow: &Value) -> Vec<String> {
        self.validator.validate(workflow)
    }
}

pub fn builtin_rule(id: &str) -> Result<Box<dyn Rule>, UnknownRuleError> {
    match id {
        "name" => Ok(Box::new(NameRule)),
        "triggers" => Ok(Box::new(TriggersRule)),
        "jobs" => Ok(Box::new(JobsRule)),
        _ => Err(UnknownRuleError(id.to_string())),
    }
}

/// An ordered collection of rules applied to every workflow.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, UnknownRuleError> {
        let rules = ids
            .iter()
            .map(|id| builtin_rule(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet { rules })
    }

    pub fn github_defaults() -> Self {
        RuleSet {
            rules: vec![Box::new(TriggersRule), Box::new(JobsRule)],
        }
    }

    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.push(Box::new(rule));
        self
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run every rule in order and concatenate their violations.
    ///
    /// A document that is not a mapping (including an empty file) produces
    /// the single [`NOT_A_MAPPING`] violation and no rule runs.
    pub fn validate(&self, workflow: &Value) -> Vec<String> {
        if !workflow.is_mapping() {
            return vec![NOT_A_MAPPING.to_string()];
        }

        self.rules
            .iter()
            .flat_map(|rule| rule.validate(workflow))
            .collect()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
