use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn read_workflow(path: &Path) -> Result<String, ParserError> {
    Ok(fs::read_to_string(path)?)
}

/// Parse a single YAML document into a generic value tree.
///
/// An empty document parses to `Value::Null`; documents containing more than
/// one `---` section are rejected.
pub fn parse_workflow_str(content: &str) -> Result<Value, ParserError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Read and parse a workflow file. Read and parse failures stay distinct
/// variants of [`ParserError`].
pub fn parse_workflow(path: &Path) -> Result<Value, ParserError> {
    let content = read_workflow(path)?;
    parse_workflow_str(&content)
}

/// The workflow's `name:` when it is a plain string.
pub fn workflow_name(workflow: &Value) -> Option<String> {
    workflow
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
}
