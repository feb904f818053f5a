//! Concurrent log analysis core
//!
//! Fans out one worker per configured log file, classifies each file's
//! content, and fans the results back in once every worker has finished.
//!
//! # Module Structure
//!
//! - `error`: failure taxonomy for single-file analysis
//! - `sim`: seedable randomness for simulated latency and failure injection
//! - `single`: analysis of one configured log file
//! - `batch`: fan-out/fan-in orchestration over the whole batch

mod batch;
mod error;
mod sim;
mod single;

pub use batch::analyze_logs;
pub use error::AnalyzeError;
pub use sim::Simulation;
pub use single::analyze_log;
