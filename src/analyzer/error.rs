//! Failure taxonomy for single-file analysis
//!
//! Every kind is recoverable at the item level: it terminates that file's
//! analysis and is captured into the result record, never propagated to
//! abort the batch.

use thiserror::Error;

/// Everything that can go wrong while analyzing one log file.
///
/// The Display rendering of each kind is stored verbatim in the result's
/// `error_details` field; callers branch on the variant, not on the text.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The configured path does not exist at check time.
    #[error("file not found or inaccessible: {0}")]
    FileNotFound(String),

    /// The file exists but has no content to parse.
    #[error("parsing error: empty log file, no content to parse")]
    EmptyLog,

    /// Deliberately injected failure used to exercise error paths under
    /// normal-looking input.
    #[error("parsing error: simulated random parsing failure")]
    InjectedFailure,

    /// Any other file-access failure (permission denied, transient I/O).
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzeError {
    /// Short failure label used as the result's message field.
    pub fn category(&self) -> &'static str {
        match self {
            AnalyzeError::FileNotFound(_) => "File access failed",
            AnalyzeError::EmptyLog => "Parsing failed",
            AnalyzeError::InjectedFailure => "Random parsing error occurred",
            AnalyzeError::Io(_) => "File read failed",
        }
    }
}
