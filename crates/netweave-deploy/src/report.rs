//! Outcome rendering: pure formatting, no decision logic.

use netweave_types::DeploymentOutcome;

/// Render a human-readable account of one deployment attempt: which path
/// ran and why, the per-segment confirmations, and the terminal status.
pub fn render(outcome: &DeploymentOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("deployment outcome ({})\n", outcome.attempt_id));
    out.push_str(&format!("  endpoint: {}\n", outcome.endpoint));
    out.push_str(&format!("  path:     {}\n", outcome.path));
    out.push_str(&format!("  status:   {}\n", outcome.status));
    if let Some(reason) = &outcome.fallback_reason {
        out.push_str(&format!("  fallback: {}\n", reason));
    }

    if !outcome.confirmations.is_empty() {
        out.push_str("  confirmations:\n");
        for confirmation in &outcome.confirmations {
            out.push_str(&format!(
                "    VLAN {:>4}  {:<16} {:<16} {}\n",
                confirmation.vlan_id.get(),
                confirmation.name,
                confirmation.policy_applied,
                confirmation.status
            ));
        }
    }

    out.push_str("  trace:\n");
    for line in &outcome.trace {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// Structured record of the outcome for downstream logging/consumption.
pub fn to_record(outcome: &DeploymentOutcome) -> serde_json::Value {
    serde_json::to_value(outcome).expect("deployment outcome serializes to JSON")
}
