use annotations::{Annotation, RecordingReporter, Reporter};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use validate_data::check_all;
use validate_data::config::Settings;
use validate_data::report::{Outcome, SUCCESS_MESSAGE, UNHANDLED_FAILURE};

const VALID_WORKFLOW: &str = r#"
name: CI
on:
  push:
    branches: [main]
  pull_request:
jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        toolchain: [stable, beta]
    steps:
      - uses: actions/checkout@v4
      - run: cargo test
"#;

const BROKEN_YAML: &str = "on: push\njobs:\n  build: [unterminated\n";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn settings_for(folders: &[&Path]) -> Settings {
    Settings::with_folders(folders.iter().map(|f| f.to_path_buf()).collect())
}

fn run(settings: &Settings) -> (Outcome, RecordingReporter) {
    let mut reporter = RecordingReporter::new();
    let outcome = validate_data::run(settings, &mut reporter);
    (outcome, reporter)
}

#[test]
fn test_valid_workflows_pass() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yml", VALID_WORKFLOW);
    write(dir.path(), "b.yaml", VALID_WORKFLOW);

    let (outcome, reporter) = run(&settings_for(&[dir.path()]));

    assert_eq!(outcome, Outcome::Passed);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        reporter.annotations,
        vec![Annotation::Info(SUCCESS_MESSAGE.to_string())]
    );
}

#[test]
fn test_broken_yaml_is_the_only_failure() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yml", VALID_WORKFLOW);
    let broken = write(dir.path(), "b.yaml", BROKEN_YAML);
    let settings = settings_for(&[dir.path()]);

    let failing: Vec<_> = check_all(&settings)
        .unwrap()
        .into_iter()
        .filter(|r| !r.is_valid())
        .collect();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].id, broken.display().to_string());
    assert_eq!(failing[0].errors.len(), 1);
    assert!(failing[0].errors[0].starts_with("Invalid YAML: "));

    let (outcome, reporter) = run(&settings);
    assert_eq!(outcome, Outcome::ValidationFailed { failing: 1 });
    assert_eq!(outcome.exit_code(), 1);
    assert!(reporter.has_failed());

    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with(&format!("Errors in {} - Invalid YAML: ", broken.display())));
}

#[test]
fn test_rule_violations_are_listed_in_order() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "deploy.yml",
        r#"
name: Deploy
on: [push, commit]
jobs:
  deploy:
    steps:
      - uses: actions/checkout
"#,
    );

    let results = check_all(&settings_for(&[dir.path()])).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name.as_deref(), Some("Deploy"));
    assert_eq!(
        results[0].errors,
        vec![
            "Unknown trigger event: 'commit'",
            "Job 'deploy' is missing 'runs-on' field",
            "Job 'deploy', step 1: Action 'actions/checkout' is missing version tag (@v2, @main, etc.)",
        ]
    );

    let (outcome, _) = run(&settings_for(&[dir.path()]));
    // three messages, one failing file
    assert_eq!(outcome, Outcome::ValidationFailed { failing: 1 });
}

#[test]
fn test_other_extensions_and_subfolders_are_ignored() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yml", VALID_WORKFLOW);
    write(dir.path(), "broken.json", BROKEN_YAML);
    write(dir.path(), "broken.txt", BROKEN_YAML);
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write(&nested, "broken.yml", BROKEN_YAML);

    let results = check_all(&settings_for(&[dir.path()])).unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![dir.path().join("a.yml").display().to_string()]);

    let (outcome, _) = run(&settings_for(&[dir.path()]));
    assert_eq!(outcome, Outcome::Passed);
}

#[test]
fn test_empty_folder_passes() {
    let dir = tempdir().unwrap();

    assert!(check_all(&settings_for(&[dir.path()])).unwrap().is_empty());

    let (outcome, reporter) = run(&settings_for(&[dir.path()]));
    assert_eq!(outcome, Outcome::Passed);
    assert_eq!(
        reporter.annotations,
        vec![Annotation::Info(SUCCESS_MESSAGE.to_string())]
    );
}

#[test]
fn test_missing_folder_is_an_unhandled_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "b.yaml", BROKEN_YAML);
    let missing = dir.path().join("missing");

    let (outcome, reporter) = run(&settings_for(&[dir.path(), missing.as_path()]));

    assert_eq!(outcome, Outcome::Unhandled);
    assert_eq!(outcome.exit_code(), 1);
    // nothing was checked, so no per-file group was emitted
    assert_eq!(reporter.annotations.len(), 2);
    assert!(matches!(
        &reporter.annotations[0],
        Annotation::Error(message)
            if message.starts_with("Unhandled error while validating workflows: Folder does not exist")
    ));
    assert_eq!(
        reporter.annotations[1],
        Annotation::SetFailed(UNHANDLED_FAILURE.to_string())
    );
}

#[test]
fn test_invalid_settings_are_unhandled_errors() {
    let dir = tempdir().unwrap();
    let mut settings = settings_for(&[dir.path()]);
    settings.rules = vec!["icons".to_string()];

    let (outcome, reporter) = run(&settings);
    assert_eq!(outcome, Outcome::Unhandled);
    assert!(reporter.errors()[0].contains("Unknown rule 'icons'"));

    let (outcome, _) = run(&Settings::with_folders(Vec::new()));
    assert_eq!(outcome, Outcome::Unhandled);
}

#[test]
fn test_schema_rule_runs_after_builtin_rules() {
    let dir = tempdir().unwrap();
    let workflows = dir.path().join("workflows");
    fs::create_dir(&workflows).unwrap();
    write(&workflows, "ci.yml", "on: push\njobs: {}\n");
    write(
        dir.path(),
        "schema.json",
        r#"{ "type": "object", "required": ["permissions"] }"#,
    );
    let settings_path = write(
        dir.path(),
        "settings.json",
        r#"{ "folders": ["workflows"], "rules": ["name"], "schema": "schema.json" }"#,
    );

    let settings = Settings::load(&settings_path).unwrap();
    let results = check_all(&settings).unwrap();

    assert_eq!(results.len(), 1);
    let errors = &results[0].errors;
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "Workflow is missing a name");
    assert!(errors[1].starts_with("Schema violation at /: "));
}

#[test]
fn test_missing_schema_is_an_unhandled_error() {
    let dir = tempdir().unwrap();
    let mut settings = settings_for(&[dir.path()]);
    settings.schema = Some(dir.path().join("absent.json"));

    let (outcome, reporter) = run(&settings);
    assert_eq!(outcome, Outcome::Unhandled);
    assert!(reporter.errors()[0].contains("Failed to read schema"));
}

#[test]
fn test_runs_are_idempotent() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yml", VALID_WORKFLOW);
    write(dir.path(), "b.yaml", BROKEN_YAML);
    write(dir.path(), "c.yml", "name: Empty\n");
    let settings = settings_for(&[dir.path()]);

    let (first_outcome, first) = run(&settings);
    let (second_outcome, second) = run(&settings);

    assert_eq!(first_outcome, Outcome::ValidationFailed { failing: 2 });
    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first.annotations, second.annotations);
}
