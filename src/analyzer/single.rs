//! Single-file analysis
//!
//! Runs the ordered checks for one configured log file and folds every
//! outcome, success or failure, into a result record. This function never
//! panics and never returns an error to the caller; per-file isolation in
//! the batch depends on that.

use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Instant;

use super::error::AnalyzeError;
use super::sim::Simulation;
use crate::config::LogConfig;
use crate::report::LogResult;

/// Analyze one configured log file.
///
/// The recorded process time covers the whole item, including the simulated
/// delay, regardless of outcome.
pub fn analyze_log(config: &LogConfig, sim: &Simulation) -> LogResult {
    let started = Instant::now();

    if let Some(delay) = sim.next_delay() {
        thread::sleep(delay);
    }

    match inspect(config, sim) {
        Ok(message) => LogResult::success(config, message, started.elapsed()),
        Err(err) => LogResult::failure(config, &err, started.elapsed()),
    }
}

/// Ordered checks for one file; the first failing check wins and no further
/// checks run.
fn inspect(config: &LogConfig, sim: &Simulation) -> Result<String, AnalyzeError> {
    let path = Path::new(&config.path);

    if let Err(err) = fs::metadata(path) {
        if err.kind() == io::ErrorKind::NotFound {
            return Err(AnalyzeError::FileNotFound(config.path.clone()));
        }
        return Err(err.into());
    }

    let content = fs::read(path)?;

    if content.is_empty() {
        return Err(AnalyzeError::EmptyLog);
    }

    // The injection point sits after the empty check and before content
    // classification.
    if sim.should_fail() {
        return Err(AnalyzeError::InjectedFailure);
    }

    // Split-on-newline semantics: a trailing newline yields a final empty
    // segment that still counts.
    let lines = content.split(|byte| *byte == b'\n').count();
    Ok(describe(&config.log_type, lines))
}

/// Success message for a recognized log type; unknown types get the generic
/// wording.
fn describe(log_type: &str, lines: usize) -> String {
    match log_type {
        "nginx-access" => format!("Nginx access log analyzed: {} entries processed", lines),
        "mysql-error" => format!("MySQL error log analyzed: {} error entries found", lines),
        "custom-app" => format!(
            "Custom application log analyzed: {} log entries processed",
            lines
        ),
        _ => format!("Generic log analyzed: {} lines processed", lines),
    }
}
