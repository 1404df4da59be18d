//! Progress reporting hook for long table scans.

use std::io::Write;

use colored::Colorize;

use crate::perf;

/// Receives the running row count during a scan.
///
/// Implementations must not influence the scan. Write failures are ignored.
pub trait Progress {
    fn update(&mut self, rows: u64);

    /// Called once with the final row count after the last row.
    fn finish(&mut self, _rows: u64) {}
}

/// Reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _rows: u64) {}
}

/// Rewrites a single `<label> <count>` line on stderr.
#[derive(Debug)]
pub struct StderrCounter {
    label: String,
}

impl StderrCounter {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }

    fn draw(&self, rows: u64) {
        let mut stderr = std::io::stderr().lock();
        let _ = write!(
            stderr,
            "\r  {:<20} {}",
            self.label.dimmed(),
            perf::format_count(rows)
        );
        let _ = stderr.flush();
    }
}

impl Progress for StderrCounter {
    fn update(&mut self, rows: u64) {
        self.draw(rows);
    }

    fn finish(&mut self, rows: u64) {
        self.draw(rows);
        eprintln!();
    }
}
