use serde::Serialize;

/// Outcome of checking one workflow definition file.
///
/// An empty `errors` list means the file passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Path of the checked file.
    pub id: String,
    /// The workflow's `name:` value, when the document declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new(id: impl Into<String>) -> Self {
        ValidationResult {
            id: id.into(),
            name: None,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn extend_errors<I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.errors.extend(errors);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Label used in reports: the id, followed by the name when known.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.id, name),
            None => self.id.clone(),
        }
    }
}
