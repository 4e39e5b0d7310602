pub mod config;
pub mod report;

use annotations::Reporter;
use config::{ConfigError, Settings};
use models::ValidationResult;
use parser::schema::{SchemaError, SchemaValidator};
use report::Outcome;
use scanner::ScanError;
use thiserror::Error;
use validators::{RuleSet, SchemaRule};

/// Anything that stops a run before every file has been checked.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub fn build_rules(settings: &Settings) -> Result<RuleSet, RunError> {
    let mut rules = RuleSet::from_ids(&settings.rules).map_err(ConfigError::from)?;

    if let Some(schema) = &settings.schema {
        let validator = SchemaValidator::from_file(schema)?;
        rules = rules.with_rule(SchemaRule::new(validator));
    }

    Ok(rules)
}

/// Scan the configured folders and check every workflow found.
///
/// Returns every result, passing or not, sorted by file path.
pub fn check_all(settings: &Settings) -> Result<Vec<ValidationResult>, RunError> {
    settings.validate()?;
    let rules = build_rules(settings)?;
    logging::debug(&format!("Enabled rules: {:?}", rules.ids()));

    let paths = scanner::scan_folders(&settings.folders, &settings.extensions)?;
    logging::info(&format!(
        "Validating {} workflow file(s) in {} folder(s)",
        paths.len(),
        settings.folders.len()
    ));

    Ok(evaluator::check_workflows(&paths, &rules))
}

/// One full run: scan, check, report. Never panics on bad input; every
/// failure ends up in `reporter` and in the returned outcome.
pub fn run(settings: &Settings, reporter: &mut dyn Reporter) -> Outcome {
    match check_all(settings) {
        Ok(results) => report::report_results(&results, reporter),
        Err(e) => {
            logging::error(&e.to_string());
            report::report_unhandled(&e, reporter)
        }
    }
}
