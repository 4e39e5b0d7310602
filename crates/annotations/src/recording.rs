use crate::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    StartGroup(String),
    EndGroup,
    Info(String),
    Error(String),
    SetFailed(String),
}

/// Keeps every annotation in memory instead of printing it.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub annotations: Vec<Annotation>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.annotations
            .iter()
            .filter_map(|a| match a {
                Annotation::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn start_group(&mut self, title: &str) {
        self.annotations.push(Annotation::StartGroup(title.to_string()));
    }

    fn end_group(&mut self) {
        self.annotations.push(Annotation::EndGroup);
    }

    fn info(&mut self, message: &str) {
        self.annotations.push(Annotation::Info(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.annotations.push(Annotation::Error(message.to_string()));
    }

    fn set_failed(&mut self, message: &str) {
        self.annotations
            .push(Annotation::SetFailed(message.to_string()));
    }

    fn has_failed(&self) -> bool {
        self.annotations
            .iter()
            .any(|a| matches!(a, Annotation::SetFailed(_)))
    }
}
