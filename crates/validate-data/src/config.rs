//! Run settings.
//!
//! Settings come from a JSON (or YAML) file, by default `settings.json` in the
//! working directory, and may be overridden from the command line:
//!
//! ```json
//! {
//!   "folders": ["../../ci", "../../automation"],
//!   "extensions": ["yml", "yaml"],
//!   "rules": ["triggers", "jobs"],
//!   "schema": "workflow.schema.json"
//! }
//! ```
//!
//! Only `folders` is required. Relative paths are resolved against the
//! directory holding the settings file.

use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validators::{builtin_rule, UnknownRuleError};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in settings {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in settings {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("No folders configured")]
    NoFolders,

    #[error("No file extensions configured")]
    NoExtensions,

    #[error(transparent)]
    UnknownRule(#[from] UnknownRuleError),
}

fn default_extensions() -> Vec<String> {
    scanner::DEFAULT_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_rules() -> Vec<String> {
    validators::DEFAULT_RULES
        .iter()
        .map(|rule| rule.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    pub folders: Vec<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Built-in rule ids, in evaluation order.
    #[serde(default = "default_rules")]
    pub rules: Vec<String>,

    /// JSON Schema every workflow must also satisfy.
    #[serde(default)]
    pub schema: Option<PathBuf>,
}

impl Settings {
    pub fn with_folders(folders: Vec<PathBuf>) -> Self {
        Settings {
            folders,
            extensions: default_extensions(),
            rules: default_rules(),
            schema: None,
        }
    }

    /// Read a settings file. YAML is used for `.yml`/`.yaml` files, JSON otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .map(|ext| ext == "yml" || ext == "yaml")
            .unwrap_or(false);

        let mut settings: Settings = if is_yaml {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        };

        if let Some(base) = path.parent() {
            settings.resolve_relative_to(base);
        }

        Ok(settings)
    }

    /// Combine the settings file and `--folder` flags.
    ///
    /// Folders given on the command line replace the configured ones. Without
    /// an explicit `config`, the default settings file is optional as long as
    /// at least one folder was given.
    pub fn resolve(config: Option<&Path>, folders: &[PathBuf]) -> Result<Self, ConfigError> {
        let default_path = Path::new(DEFAULT_SETTINGS_FILE);

        let mut settings = match config {
            Some(path) => Settings::load(path)?,
            None if !folders.is_empty() && !default_path.exists() => {
                return Ok(Settings::with_folders(folders.to_vec()));
            }
            None => Settings::load(default_path)?,
        };

        if !folders.is_empty() {
            settings.folders = folders.to_vec();
        }

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.folders.is_empty() {
            return Err(ConfigError::NoFolders);
        }
        if self.extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(ConfigError::NoExtensions);
        }
        for rule in &self.rules {
            builtin_rule(rule)?;
        }
        Ok(())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for folder in &mut self.folders {
            if folder.is_relative() {
                *folder = base.join(&*folder);
            }
        }
        if let Some(schema) = &mut self.schema {
            if schema.is_relative() {
                *schema = base.join(&*schema);
            }
        }
    }
}

/// How annotations are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// GitHub workflow commands inside GitHub Actions, console output elsewhere
    Auto,
    /// GitHub Actions workflow commands
    Github,
    /// Coloured human-readable output
    Console,
}

impl ReportFormat {
    /// Pick a concrete format given the value of `GITHUB_ACTIONS`.
    pub fn resolve(self, github_actions: Option<&str>) -> ReportFormat {
        match self {
            ReportFormat::Auto if github_actions == Some("true") => ReportFormat::Github,
            ReportFormat::Auto => ReportFormat::Console,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_json_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "folders": ["../ci", "/abs/workflows"] }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(
            settings.folders,
            vec![dir.path().join("../ci"), PathBuf::from("/abs/workflows")]
        );
        assert_eq!(settings.extensions, vec!["yml", "yaml"]);
        assert_eq!(settings.rules, vec!["triggers", "jobs"]);
        assert_eq!(settings.schema, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        fs::write(
            &path,
            "folders: [workflows]\nextensions: [yml]\nrules: [name, jobs]\nschema: schema.json\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.folders, vec![dir.path().join("workflows")]);
        assert_eq!(settings.extensions, vec!["yml"]);
        assert_eq!(settings.rules, vec!["name", "jobs"]);
        assert_eq!(settings.schema, Some(dir.path().join("schema.json")));
    }

    #[test]
    fn test_malformed_settings() {
        let dir = tempdir().unwrap();

        let missing_folders = dir.path().join("a.json");
        fs::write(&missing_folders, r#"{ "extensions": ["yml"] }"#).unwrap();
        assert!(matches!(
            Settings::load(&missing_folders),
            Err(ConfigError::Json { .. })
        ));

        let unknown_key = dir.path().join("b.json");
        fs::write(&unknown_key, r#"{ "folders": [], "icons": "icons" }"#).unwrap();
        assert!(matches!(
            Settings::load(&unknown_key),
            Err(ConfigError::Json { .. })
        ));

        assert!(matches!(
            Settings::load(&dir.path().join("absent.json")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            Settings::with_folders(Vec::new()).validate(),
            Err(ConfigError::NoFolders)
        ));

        let mut settings = Settings::with_folders(vec![PathBuf::from("ci")]);
        settings.extensions = vec![".".to_string()];
        assert!(matches!(settings.validate(), Err(ConfigError::NoExtensions)));

        let mut settings = Settings::with_folders(vec![PathBuf::from("ci")]);
        settings.rules = vec!["icons".to_string()];
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_cli_folders_override_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "folders": ["ci"], "rules": ["jobs"] }"#).unwrap();

        let settings = Settings::resolve(Some(&path), &[PathBuf::from("other")]).unwrap();
        assert_eq!(settings.folders, vec![PathBuf::from("other")]);
        assert_eq!(settings.rules, vec!["jobs"]);
    }

    #[test]
    fn test_report_format_resolution() {
        assert_eq!(
            ReportFormat::Auto.resolve(Some("true")),
            ReportFormat::Github
        );
        assert_eq!(ReportFormat::Auto.resolve(None), ReportFormat::Console);
        assert_eq!(
            ReportFormat::Console.resolve(Some("true")),
            ReportFormat::Console
        );
        assert_eq!(ReportFormat::Github.resolve(None), ReportFormat::Github);
    }
}
