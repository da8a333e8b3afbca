//! Error types for the deployment pipeline.
//!
//! Session errors are never fatal to a deployment: the executor absorbs
//! every one of them into a fallback transition (or a strict-mode failure
//! outcome) and the caller only ever sees a terminal
//! [`DeploymentOutcome`](netweave_types::DeploymentOutcome).

use thiserror::Error;

/// Failures of the live protocol session.
///
/// The executor treats every variant identically -- capture the diagnostic,
/// fall back to simulation -- so the distinction exists for probing and for
/// the outcome trace, not for control flow.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The transport could not be established or gave out mid-exchange
    /// (refused, unreachable, timeout, closed).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The peer rejected the caller's credentials.
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// The peer spoke, but not the protocol we expected.
    #[error("protocol failure: {0}")]
    Protocol(String),
}

/// Result type for protocol session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A malformed configuration document reached the simulator.
///
/// Unreachable when the document came out of a successful translation;
/// when triggered it is fatal to the attempt, since there is no further
/// fallback behind the simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A record carries an identifier outside the assignable range.
    #[error("segment '{name}' carries out-of-range identifier {value}")]
    RecordOutOfRange {
        /// Name of the offending segment.
        name: String,
        /// The out-of-range identifier value.
        value: u16,
    },
}

/// Result type for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_carry_the_diagnostic() {
        let err = SessionError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "transport failure: connection refused");

        let err = SessionError::Auth("bad password for admin".into());
        assert!(err.to_string().contains("bad password"));
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionError>();
        assert_send_sync::<SimulationError>();
    }
}
