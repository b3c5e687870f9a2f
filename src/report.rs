//! Diagnostics and run statistics
//!
//! Everything here writes to stderr; stdout carries only data.

use bytesize::ByteSize;
use colored::*;
use std::time::{Duration, Instant};

/// Set up env_logger on stderr; RUST_LOG overrides the flag-derived default
///
/// A second call in the same process keeps the first logger.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("{} {}", "error:".red().bold(), text);
}

/// Print an error together with its chain of causes
pub fn print_error_chain(error: &anyhow::Error) {
    print_error(&error.to_string());

    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".red(), cause);
    }
}

/// Statistics for one run
#[derive(Debug)]
pub struct RunStats {
    pub bytes_read: u64,
    pub lines_read: u64,
    pub lines_written: u64,
    pub bytes_written: u64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            bytes_read: 0,
            lines_read: 0,
            lines_written: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// One-line summary of the run
    pub fn summary(&self, command: &str) -> String {
        format!(
            "{}: {} lines in ({}), {} lines out ({}) in {}",
            command,
            format_number(self.lines_read),
            ByteSize(self.bytes_read),
            format_number(self.lines_written),
            ByteSize(self.bytes_written),
            format_duration(self.elapsed()),
        )
    }

    /// Log the summary at debug level
    pub fn log_summary(&self, command: &str) {
        log::debug!("{}", self.summary(command));
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();

    if millis < 1000 {
        format!("{}ms", millis)
    } else if duration.as_secs() < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
