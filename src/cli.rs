//! Stderr reporting helpers for the rs2gene binary.
//!
//! Stdout is reserved for result rows, so everything here goes to stderr.

use std::time::Instant;

use colored::Colorize;

use crate::perf;

/// Width of section rules and of the key column in key/value lines.
const RULE_WIDTH: usize = 56;
const KEY_WIDTH: usize = 22;

pub fn banner(subtitle: &str) {
    eprintln!();
    eprintln!(
        "{} {} {}",
        "rs2gene".bold().cyan(),
        env!("CARGO_PKG_VERSION").dimmed(),
        subtitle.dimmed()
    );
    eprintln!();
}

/// `== Title ======` padded to a fixed width.
pub fn section(title: &str) {
    let fill = RULE_WIDTH.saturating_sub(title.chars().count() + 4).max(3);
    eprintln!(
        "{} {} {}",
        "==".dimmed(),
        title.bold().blue(),
        "=".repeat(fill).dimmed()
    );
}

pub fn kv(key: &str, value: &str) {
    let key = format!("{key}:");
    eprintln!("  {:<KEY_WIDTH$} {value}", key.dimmed());
}

/// Key/value line for a row or identifier count, right-aligned.
pub fn count(key: &str, n: u64) {
    let key = format!("{key}:");
    eprintln!("  {:<KEY_WIDTH$} {:>13}", key.dimmed(), perf::format_count(n));
}

pub fn success(msg: &str) {
    eprintln!("  {} {msg}", "done".green().bold());
}

pub fn warning(msg: &str) {
    eprintln!("  {} {}", "warning:".yellow().bold(), msg.yellow());
}

/// One closing line with wall time, peak memory and the number of rows written.
pub fn print_summary(start: Instant, rows_written: usize) {
    let memory = perf::peak_memory_bytes()
        .map(perf::format_bytes)
        .unwrap_or_else(|| "n/a".to_string());
    eprintln!();
    eprintln!(
        "{} {} {} {} {} {}",
        "Finished in".dimmed(),
        perf::format_elapsed(start.elapsed()).bold(),
        "| peak memory".dimmed(),
        memory.bold(),
        "| rows written".dimmed(),
        perf::format_count(rows_written as u64).bold(),
    );
    eprintln!();
}
