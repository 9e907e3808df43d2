//! Error types for the bonscan-core library.

use thiserror::Error;

/// Main error type for the bonscan library.
///
/// The extraction pipeline itself never fails on malformed text; garbage
/// input yields an empty result. Errors only arise at the boundary, before
/// the pipeline runs.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Input exceeds the configured size ceiling.
    #[error("input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// Result type for the bonscan library.
pub type Result<T> = std::result::Result<T, ScanError>;
