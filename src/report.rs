//! Analysis results and report export
//!
//! The result record is created once inside the analyzer, handed off by
//! value into the fan-in collection, and never mutated afterwards.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Serialize, Serializer};

use crate::analyzer::AnalyzeError;
use crate::config::LogConfig;

/// Outcome of one file's analysis. Binary: no partial or warning state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "SUCCESS",
            LogStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One analysis outcome, ready for reporting.
///
/// `error_details` is non-empty exactly when `status` is `Failed`; the
/// constructors are the only way the analyzer builds a record, so the
/// invariant holds by construction.
#[derive(Debug, Clone, Serialize)]
pub struct LogResult {
    pub log_id: String,
    pub file_path: String,
    pub status: LogStatus,
    pub message: String,
    pub error_details: String,
    #[serde(serialize_with = "humantime_duration")]
    pub process_time: Duration,
}

impl LogResult {
    /// Successful analysis of `config` with a content-derived message.
    pub fn success(config: &LogConfig, message: String, process_time: Duration) -> Self {
        Self {
            log_id: config.id.clone(),
            file_path: config.path.clone(),
            status: LogStatus::Success,
            message,
            error_details: String::new(),
            process_time,
        }
    }

    /// Failed analysis of `config`; the error's category becomes the message
    /// and its rendering becomes the error details.
    pub fn failure(config: &LogConfig, error: &AnalyzeError, process_time: Duration) -> Self {
        Self {
            log_id: config.id.clone(),
            file_path: config.path.clone(),
            status: LogStatus::Failed,
            message: error.category().to_string(),
            error_details: error.to_string(),
            process_time,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == LogStatus::Success
    }
}

fn humantime_duration<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&humantime::format_duration(*duration))
}

/// Write the analysis report as pretty-printed JSON, creating intermediate
/// directories as needed. Any write failure fails the whole export.
pub fn export_report(output_path: &str, results: &[LogResult]) -> Result<()> {
    if let Some(dir) = Path::new(output_path).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| {
                anyhow::anyhow!("could not create directory '{}': {}", dir.display(), e)
            })?;
        }
    }

    let json = serde_json::to_string_pretty(results)
        .map_err(|e| anyhow::anyhow!("could not serialize results to JSON: {}", e))?;

    fs::write(output_path, json)
        .map_err(|e| anyhow::anyhow!("could not write report to '{}': {}", output_path, e))?;

    Ok(())
}
