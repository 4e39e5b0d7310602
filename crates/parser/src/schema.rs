use jsonschema::JSONSchema;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse schema {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to compile JSON schema: {0}")]
    Compile(String),
}

/// A compiled JSON Schema that workflow documents are checked against.
pub struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    pub fn from_json(schema_json: &JsonValue) -> Result<Self, SchemaError> {
        let schema = JSONSchema::compile(schema_json)
            .map_err(|e| SchemaError::Compile(e.to_string()))?;

        Ok(Self { schema })
    }

    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let schema_json: JsonValue =
            serde_json::from_str(&content).map_err(|source| SchemaError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&schema_json)
    }

    /// Check a parsed workflow, returning one message per schema violation.
    pub fn validate(&self, workflow: &YamlValue) -> Vec<String> {
        let workflow_json = match serde_json::to_value(workflow) {
            Ok(json) => json,
            Err(e) => return vec![format!("Workflow cannot be represented as JSON: {}", e)],
        };

        let violations = match self.schema.validate(&workflow_json) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|error| {
                    let path = error.instance_path.to_string();
                    let path = if path.is_empty() { "/".to_string() } else { path };
                    format!("Schema violation at {}: {}", path, error)
                })
                .collect(),
        };
        violations
    }
}
