use crate::Reporter;
use std::io::{self, Write};

/// Escape a message for use as workflow command data.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Emits GitHub Actions workflow commands (`::group::`, `::error::`, ...).
pub struct GithubReporter<W: Write> {
    out: W,
    failed: bool,
}

impl GithubReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GithubReporter<W> {
    pub fn new(out: W) -> Self {
        GithubReporter { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            logging::warning(&format!("Failed to write annotation: {}", e));
        }
    }
}

impl<W: Write> Reporter for GithubReporter<W> {
    fn start_group(&mut self, title: &str) {
        self.emit(&format!("::group::{}", escape_data(title)));
    }

    fn end_group(&mut self) {
        self.emit("::endgroup::");
    }

    fn info(&mut self, message: &str) {
        self.emit(message);
    }

    fn error(&mut self, message: &str) {
        self.emit(&format!("::error::{}", escape_data(message)));
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.error(message);
    }

    fn has_failed(&self) -> bool {
        self.failed
    }
}
