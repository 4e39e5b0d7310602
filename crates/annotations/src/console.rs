use crate::Reporter;
use colored::*;
use std::io::{self, Write};

/// Human-readable output for local runs.
pub struct ConsoleReporter<W: Write> {
    out: W,
    depth: usize,
    failed: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter {
            out,
            depth: 0,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        let indent = "  ".repeat(self.depth);
        for part in line.lines() {
            if let Err(e) = writeln!(self.out, "{}{}", indent, part) {
                logging::warning(&format!("Failed to write report: {}", e));
                return;
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn start_group(&mut self, title: &str) {
        self.emit(&title.bold().to_string());
        self.depth += 1;
    }

    fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn info(&mut self, message: &str) {
        self.emit(message);
    }

    fn error(&mut self, message: &str) {
        self.emit(&format!("{} {}", "✗".red(), message));
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.emit(&format!("{} {}", "❌".red(), message.red().bold()));
    }

    fn has_failed(&self) -> bool {
        self.failed
    }
}
