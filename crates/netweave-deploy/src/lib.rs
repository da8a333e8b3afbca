//! # netweave-deploy
//!
//! Resilient deployment of configuration documents.
//!
//! ```text
//! ConfigDocument ──▶ deploy ──▶ NetconfSession ──ok──▶ Outcome{path: live}
//!                                  │
//!                                  └─any failure──▶ simulate ──▶ Outcome{path: simulated}
//! ```
//!
//! The executor guarantees a terminal, reportable outcome for every
//! attempt: live-session failures of any kind (refused, timeout, auth
//! rejection, protocol mismatch) are captured as diagnostics and converted
//! into a fallback transition, never escalated to the caller. The only
//! failed outcomes are a malformed document reaching the simulator and an
//! explicit strict-mode live failure.
//!
//! One session per invocation, opened and closed inside `deploy`; no
//! connection pooling, no retry, no shared state between concurrent
//! attempts.

#![deny(unsafe_code)]

pub mod error;
pub mod executor;
pub mod report;
pub mod session;
pub mod simulate;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use error::{SessionError, SessionResult, SimulationError, SimulationResult};
pub use executor::{deploy, deploy_with_options, DeployOptions};
pub use report::{render, to_record};
pub use session::{NetconfSession, RpcReply, BASE_CAPABILITY};
pub use simulate::{simulate, SimulationReport, COMMIT_MARKER};
