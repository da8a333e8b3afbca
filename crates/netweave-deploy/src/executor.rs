//! The two-path deployment executor.
//!
//! One invocation, one attempt: try a live protocol session first; on any
//! session failure, capture the diagnostic and fall back to the
//! deterministic simulation. Both paths fill the same outcome shape -- the
//! `path` field is the only discriminator -- and the executor's signature
//! is infallible: it always returns a terminal [`DeploymentOutcome`],
//! never a fault.

use crate::error::SessionResult;
use crate::session::NetconfSession;
use crate::simulate::simulate;
use netweave_types::{
    AttemptId, ConfigDocument, Confirmation, DeployPath, DeploymentOutcome, EndpointConfig,
    OutcomeStatus,
};
use tracing::{info, warn};

/// Caller-tunable execution options.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Treat a live-session failure as a failed outcome instead of
    /// falling back to simulation.
    pub strict: bool,
}

/// Deploy with default options (fallback to simulation enabled).
pub async fn deploy(doc: &ConfigDocument, endpoint: &EndpointConfig) -> DeploymentOutcome {
    deploy_with_options(doc, endpoint, &DeployOptions::default()).await
}

/// Execute one deployment attempt.
///
/// The returned outcome is terminal in every case:
///
/// - live session succeeds -> path `live`, status succeeded;
/// - live session fails -> diagnostic captured, simulation replays the
///   document -> path `simulated`, status succeeded;
/// - strict mode and the live session fails -> path `live`, status failed
///   with the session diagnostic;
/// - a malformed document reaches the simulator -> status failed (there is
///   no fallback behind the simulation).
pub async fn deploy_with_options(
    doc: &ConfigDocument,
    endpoint: &EndpointConfig,
    options: &DeployOptions,
) -> DeploymentOutcome {
    let mut attempt = DeploymentAttempt::new(endpoint);
    attempt.log(format!(
        "connecting to device {} (timeout {}s)",
        endpoint.endpoint(),
        endpoint.timeout.as_secs()
    ));

    match try_live(doc, endpoint, &mut attempt).await {
        Ok(confirmations) => {
            info!(
                endpoint = %endpoint.endpoint(),
                segments = confirmations.len(),
                "configuration pushed to live device"
            );
            attempt.log("configuration pushed to live device");
            attempt.finish(DeployPath::Live, OutcomeStatus::Succeeded, confirmations, None)
        }
        Err(err) => {
            let diagnostic = err.to_string();
            warn!(endpoint = %endpoint.endpoint(), error = %diagnostic, "live push failed");
            attempt.log(format!("live push failed: {}", diagnostic));

            if options.strict {
                attempt.log("strict mode: not falling back to simulation");
                return attempt.finish(
                    DeployPath::Live,
                    OutcomeStatus::Failed {
                        reason: diagnostic.clone(),
                    },
                    Vec::new(),
                    Some(diagnostic),
                );
            }

            attempt.log("falling back to simulation");
            match simulate(doc) {
                Ok(report) => {
                    for line in report.trace {
                        attempt.log(line);
                    }
                    attempt.finish(
                        DeployPath::Simulated,
                        OutcomeStatus::Succeeded,
                        report.confirmations,
                        Some(diagnostic),
                    )
                }
                Err(sim_err) => attempt.finish(
                    DeployPath::Simulated,
                    OutcomeStatus::Failed {
                        reason: sim_err.to_string(),
                    },
                    Vec::new(),
                    Some(diagnostic),
                ),
            }
        }
    }
}

async fn try_live(
    doc: &ConfigDocument,
    endpoint: &EndpointConfig,
    attempt: &mut DeploymentAttempt,
) -> SessionResult<Vec<Confirmation>> {
    let mut session = NetconfSession::open(endpoint).await?;
    attempt.log(format!(
        "session established, peer advertises {} capabilities",
        session.peer_capabilities().len()
    ));

    let reply = session.apply_and_commit(doc).await?;
    attempt.log(format!(
        "edit-config reply: {}",
        if reply.ok { "ok" } else { "unacknowledged" }
    ));

    // A minimal <ok/> reply carries no per-segment detail; confirmations
    // reflect the peer's acknowledgement of the whole document.
    Ok(doc
        .records
        .iter()
        .map(|record| Confirmation::reported(record, "ok"))
        .collect())
}

/// Working record of one attempt; finalized exactly once into an outcome.
struct DeploymentAttempt {
    attempt_id: AttemptId,
    endpoint: String,
    trace: Vec<String>,
    started_at: chrono::DateTime<chrono::Utc>,
}

impl DeploymentAttempt {
    fn new(endpoint: &EndpointConfig) -> Self {
        Self {
            attempt_id: AttemptId::new(),
            endpoint: endpoint.endpoint(),
            trace: Vec::new(),
            started_at: chrono::Utc::now(),
        }
    }

    fn log(&mut self, line: impl Into<String>) {
        self.trace.push(line.into());
    }

    fn finish(
        self,
        path: DeployPath,
        status: OutcomeStatus,
        confirmations: Vec<Confirmation>,
        fallback_reason: Option<String>,
    ) -> DeploymentOutcome {
        DeploymentOutcome {
            attempt_id: self.attempt_id,
            endpoint: self.endpoint,
            path,
            status,
            fallback_reason,
            confirmations,
            trace: self.trace,
            started_at: self.started_at,
            finished_at: chrono::Utc::now(),
        }
    }
}
