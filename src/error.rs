//! Error types for the adjustment engine

use thiserror::Error;

/// Main error type for multiple-testing adjustment operations
#[derive(Error, Debug)]
pub enum AdjustError {
    #[error("Out of memory: could not reserve working buffers for {records} records")]
    OutOfMemory { records: usize },

    #[error("Write failure: {0}")]
    WriteFailure(#[from] std::io::Error),

    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("Inconsistent input: {reason}")]
    InconsistentInput { reason: String },

    #[error("{feature} is not yet supported")]
    NotYetSupported { feature: &'static str },
}

/// Result type alias for adjustment operations
pub type Result<T> = std::result::Result<T, AdjustError>;
