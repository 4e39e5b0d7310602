// annotations crate

mod console;
mod github;
mod recording;

pub use console::ConsoleReporter;
pub use github::{escape_data, GithubReporter};
pub use recording::{Annotation, RecordingReporter};

/// Where run reports go: the CI provider's annotation channel or a terminal.
pub trait Reporter {
    fn start_group(&mut self, title: &str);

    fn end_group(&mut self);

    fn info(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Report `message` as an error and mark the run as failed.
    fn set_failed(&mut self, message: &str);

    fn has_failed(&self) -> bool;
}
