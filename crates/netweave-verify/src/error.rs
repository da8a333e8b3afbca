//! Error types for the verification client.

use thiserror::Error;

/// Failures of the read-only metric verification step.
///
/// These never affect a deployment outcome; they are reported to the
/// caller of the verification command only.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The HTTP request could not be built or executed.
    #[error("metrics backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("metrics backend returned HTTP {status}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The backend reported a query-level error.
    #[error("metrics backend rejected the query: {0}")]
    Backend(String),
}

/// Result type for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;
