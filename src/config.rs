//! Batch configuration loading
//!
//! Reads the JSON configuration file that names the log files to analyze.
//! Loader failures happen before any analysis starts and are reported
//! through the CLI shell, not through the analyzer's error taxonomy.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One log file to analyze, as declared in the batch configuration.
///
/// `log_type` is a free-form tag; recognized values get specialized success
/// messages, anything else falls back to the generic wording. Unknown types
/// are not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub id: String,
    pub path: String,
    #[serde(rename = "type")]
    pub log_type: String,
}

/// Read a JSON array of log configurations from `path`.
pub fn read_configs(path: &str) -> Result<Vec<LogConfig>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("could not read config file '{}': {}", path, e))?;

    let configs: Vec<LogConfig> = serde_json::from_str(&data)
        .map_err(|e| anyhow::anyhow!("could not parse config file '{}': {}", path, e))?;

    Ok(configs)
}
