//! Intent validation and translation.
//!
//! `translate` is a pure function: identical intent input always yields an
//! identical configuration document. No timestamps, no random ordering --
//! segment records appear in the intent's declaration order.

use crate::error::{TranslateError, TranslateResult};
use netweave_types::{ConfigDocument, Intent, Policy, SegmentRecord, VlanId};
use tracing::debug;

/// Parse an intent from its JSON source.
///
/// Structural malformation (missing mapping, invalid JSON) surfaces as
/// [`TranslateError::Malformed`] so the caller can report a translation
/// failure, distinct from downstream document problems.
pub fn parse_intent(json: &str) -> TranslateResult<Intent> {
    serde_json::from_str(json).map_err(|e| TranslateError::Malformed(e.to_string()))
}

/// Validate an intent and translate it into a configuration document.
///
/// Validation checks, in order:
/// 1. every segment in `vlans` has a policy, and every policy names a
///    known segment (bijective key sets);
/// 2. each VLAN identifier is inside the assignable range;
/// 3. each policy label is a member of the closed enumeration.
///
/// Persisting the resulting document is the caller's responsibility.
pub fn translate(intent: &Intent) -> TranslateResult<ConfigDocument> {
    for segment in intent.vlans.keys() {
        if !intent.policies.contains_key(segment) {
            return Err(TranslateError::MissingPolicy {
                segment: segment.clone(),
            });
        }
    }
    for segment in intent.policies.keys() {
        if !intent.vlans.contains_key(segment) {
            return Err(TranslateError::UnknownSegment {
                segment: segment.clone(),
            });
        }
    }

    let mut records = Vec::with_capacity(intent.vlans.len());
    for (segment, raw_id) in &intent.vlans {
        let vlan_id = VlanId::new(*raw_id).ok_or_else(|| TranslateError::IdOutOfRange {
            segment: segment.clone(),
            value: *raw_id,
        })?;

        let label = &intent.policies[segment];
        let policy = Policy::parse(label).ok_or_else(|| TranslateError::UnknownPolicy {
            segment: segment.clone(),
            label: label.clone(),
        })?;

        records.push(SegmentRecord {
            vlan_id,
            name: segment.clone(),
            policy,
        });
    }

    debug!(segments = records.len(), "intent translated");
    Ok(ConfigDocument::from_records(records))
}
