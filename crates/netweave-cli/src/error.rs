//! CLI error type and process exit contract.
//!
//! Exit codes: translation failures (and most other errors) exit 1; a
//! missing or invalid configuration document exits 2, so callers can tell
//! "fix the intent" apart from "run translate first".

use netweave_deploy::SessionError;
use netweave_intent::{DocumentError, TranslateError};
use netweave_verify::VerifyError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the CLI boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("configuration document not found at {path} (run `netweave translate` first)", path = path.display())]
    DocumentMissing { path: PathBuf },

    #[error("invalid configuration document at {path}: {source}", path = path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error("deployment failed: {reason}")]
    DeploymentFailed { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::DocumentMissing { .. } | CliError::Document { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_exits_2() {
        let err = CliError::DocumentMissing {
            path: PathBuf::from("generated_config.xml"),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("netweave translate"));
    }

    #[test]
    fn translation_failure_exits_1() {
        let err = CliError::Translate(TranslateError::Malformed("not json".into()));
        assert_eq!(err.exit_code(), 1);
    }
}
