//! Deployment outcome types.
//!
//! An outcome is the single normalized result of one deployment attempt,
//! regardless of which path produced it. The `path` field is the only
//! discriminator between a live push and a simulated one; both paths fill
//! the same shape so downstream consumers branch on data, not on faults.

use crate::document::{Policy, SegmentRecord, VlanId};
use serde::{Deserialize, Serialize};

// ── Attempt Identifier ──────────────────────────────────────────────────

/// Unique identifier for one deployment attempt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(pub String);

impl AttemptId {
    /// Generate a new unique attempt ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt:{}", self.0)
    }
}

// ── Deployment Path ─────────────────────────────────────────────────────

/// Which path produced the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployPath {
    /// A real protocol session reached the device.
    Live,
    /// Deterministic replay, no network I/O.
    Simulated,
}

impl std::fmt::Display for DeployPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployPath::Live => write!(f, "live"),
            DeployPath::Simulated => write!(f, "simulated"),
        }
    }
}

// ── Outcome Status ──────────────────────────────────────────────────────

/// Terminal status of a deployment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// The configuration was applied (live) or fully replayed (simulated).
    Succeeded,
    /// The attempt could not terminate usefully; reserved for a malformed
    /// document reaching the simulator or a strict-mode live failure,
    /// never for ordinary connectivity problems.
    Failed {
        /// Why the attempt failed.
        reason: String,
    },
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeStatus::Succeeded => write!(f, "succeeded"),
            OutcomeStatus::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

// ── Confirmation ────────────────────────────────────────────────────────

/// Per-segment confirmation, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// VLAN identifier of the confirmed segment.
    pub vlan_id: VlanId,
    /// Segment name.
    pub name: String,
    /// Policy that was (or would have been) applied.
    pub policy_applied: Policy,
    /// Simulated path reports `applied`; live path carries whatever the
    /// protocol peer reported.
    pub status: String,
}

impl Confirmation {
    /// Confirmation for a simulated application of one record.
    pub fn applied(record: &SegmentRecord) -> Self {
        Self {
            vlan_id: record.vlan_id,
            name: record.name.clone(),
            policy_applied: record.policy,
            status: "applied".to_string(),
        }
    }

    /// Confirmation for a record acknowledged by the live peer.
    pub fn reported(record: &SegmentRecord, status: impl Into<String>) -> Self {
        Self {
            vlan_id: record.vlan_id,
            name: record.name.clone(),
            policy_applied: record.policy,
            status: status.into(),
        }
    }
}

// ── Deployment Outcome ──────────────────────────────────────────────────

/// Finalized, immutable summary of one deployment attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentOutcome {
    /// Unique attempt identifier.
    pub attempt_id: AttemptId,

    /// Target endpoint in `host:port` form.
    pub endpoint: String,

    /// Which path produced this outcome.
    pub path: DeployPath,

    /// Terminal status.
    pub status: OutcomeStatus,

    /// Diagnostic captured from the live path when it gave way to
    /// simulation; `None` for a live success.
    pub fallback_reason: Option<String>,

    /// Per-segment confirmations in document order.
    pub confirmations: Vec<Confirmation>,

    /// Human-readable trace of the attempt.
    pub trace: Vec<String>,

    /// When the attempt started.
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// When the attempt reached its terminal status.
    pub finished_at: chrono::DateTime<chrono::Utc>,
}

impl DeploymentOutcome {
    /// Whether the attempt terminated successfully.
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SegmentRecord {
        SegmentRecord {
            vlan_id: VlanId(10),
            name: "CS".to_string(),
            policy: Policy::InternetAccess,
        }
    }

    #[test]
    fn path_labels() {
        assert_eq!(DeployPath::Live.to_string(), "live");
        assert_eq!(DeployPath::Simulated.to_string(), "simulated");
    }

    #[test]
    fn simulated_confirmation_is_applied() {
        let confirmation = Confirmation::applied(&record());
        assert_eq!(confirmation.status, "applied");
        assert_eq!(confirmation.policy_applied, Policy::InternetAccess);
        assert_eq!(confirmation.vlan_id, VlanId(10));
    }

    #[test]
    fn live_confirmation_carries_peer_status() {
        let confirmation = Confirmation::reported(&record(), "ok");
        assert_eq!(confirmation.status, "ok");
    }

    #[test]
    fn outcome_serializes_path_as_snake_case() {
        let json = serde_json::to_string(&DeployPath::Simulated).unwrap();
        assert_eq!(json, r#""simulated""#);
    }

    #[test]
    fn attempt_ids_are_unique() {
        assert_ne!(AttemptId::new(), AttemptId::new());
    }
}
