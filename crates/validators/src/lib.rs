// validators crate

mod actions;
mod jobs;
mod matrix;
mod rules;
mod steps;
mod triggers;

pub use actions::{validate_action_reference, validate_reusable_workflow_reference};
pub use jobs::validate_jobs;
pub use matrix::{validate_matrix, validate_strategy};
pub use rules::{
    builtin_rule, JobsRule, NameRule, Rule, RuleSet, SchemaRule, TriggersRule, UnknownRuleError,
    BUILTIN_RULES, DEFAULT_RULES, NOT_A_MAPPING,
};
pub use steps::validate_steps;
pub use triggers::validate_triggers;
