//! Deterministic deployment simulation.
//!
//! The simulation is the audit trail of exactly what would be pushed: one
//! confirmation per segment record, in document order, never reordered,
//! deduplicated or skipped, followed by a single commit marker. Pure and
//! I/O-free, so its outcome is equivalent in shape to a live success.

use crate::error::{SimulationError, SimulationResult};
use netweave_types::{ConfigDocument, Confirmation};

/// Trace line appended after the per-segment replay.
pub const COMMIT_MARKER: &str = "commit simulated";

/// Result of replaying a configuration document.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// One confirmation per segment record, in document order.
    pub confirmations: Vec<Confirmation>,
    /// Human-readable replay trace, ending with the commit marker.
    pub trace: Vec<String>,
}

/// Replay the intended configuration changes without any network I/O.
///
/// Fails only when a malformed document reaches the simulator -- a state
/// that cannot arise from a successful translation, and that has no
/// further fallback behind it.
pub fn simulate(doc: &ConfigDocument) -> SimulationResult<SimulationReport> {
    let mut confirmations = Vec::with_capacity(doc.len());
    let mut trace = Vec::with_capacity(doc.len() + 1);

    for record in &doc.records {
        if !record.vlan_id.is_valid() {
            return Err(SimulationError::RecordOutOfRange {
                name: record.name.clone(),
                value: record.vlan_id.get(),
            });
        }
        trace.push(format!(
            "applying VLAN {} -> {} [{}]",
            record.vlan_id, record.name, record.policy
        ));
        confirmations.push(Confirmation::applied(record));
    }

    trace.push(COMMIT_MARKER.to_string());
    Ok(SimulationReport {
        confirmations,
        trace,
    })
}
