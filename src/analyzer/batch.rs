//! Batch orchestration
//!
//! Fan-out/fan-in over the configured log entries: one worker thread per
//! entry, results collected over a bounded completion channel. There is no
//! worker pool cap and no backpressure; each unit of work is cheap and
//! bounded in duration.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::bounded;

use super::sim::Simulation;
use super::single::analyze_log;
use crate::config::LogConfig;
use crate::report::LogResult;

/// Analyze every configured log file concurrently.
///
/// Blocks until all entries have finished and returns exactly one result per
/// config, in no guaranteed order. A failure in one entry never affects any
/// other; failures surface as FAILED results, not errors.
pub fn analyze_logs(configs: Vec<LogConfig>, sim: Arc<Simulation>) -> Vec<LogResult> {
    // Capacity covers one result per worker, so no send ever blocks.
    let (result_sender, result_receiver) = bounded(configs.len());

    let mut handles = Vec::with_capacity(configs.len());
    for config in configs {
        let sender = result_sender.clone();
        let sim = Arc::clone(&sim);
        handles.push(thread::spawn(move || {
            let _ = sender.send(analyze_log(&config, &sim));
        }));
    }

    // Drop the original sender so the drain ends once the last worker has
    // hung up.
    drop(result_sender);

    let results: Vec<LogResult> = result_receiver.iter().collect();

    for handle in handles {
        let _ = handle.join();
    }

    results
}
