//! The configuration document and its building blocks.
//!
//! A document is an ordered sequence of segment records wrapped in a single
//! container with a fixed namespace. It is produced by the translator,
//! immutable once produced, and is the single source of truth the deployment
//! executor consumes.

use serde::{Deserialize, Serialize};

// ── VLAN Identifier ─────────────────────────────────────────────────────

/// A VLAN identifier, valid in the inclusive range [1, 4094].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VlanId(pub u16);

impl VlanId {
    /// Smallest assignable VLAN identifier.
    pub const MIN: u16 = 1;
    /// Largest assignable VLAN identifier (4095 is reserved).
    pub const MAX: u16 = 4094;

    /// Construct from a raw value, returning `None` when out of range.
    pub fn new(raw: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&raw) {
            Some(Self(raw as u16))
        } else {
            None
        }
    }

    /// The numeric value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Whether the carried value is inside the assignable range.
    pub fn is_valid(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl std::fmt::Display for VlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Policy ──────────────────────────────────────────────────────────────

/// Closed enumeration of segment policies.
///
/// Any label outside this set is a validation failure at the translation
/// and parsing boundaries; the set is intentionally not extensible at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Segment may reach external networks.
    InternetAccess,
    /// Segment is confined to internal traffic.
    Restricted,
}

impl Policy {
    /// All members of the enumeration, in label order.
    pub const ALL: [Policy; 2] = [Policy::InternetAccess, Policy::Restricted];

    /// The wire label for this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::InternetAccess => "internet_access",
            Policy::Restricted => "restricted",
        }
    }

    /// Parse a wire label, returning `None` for anything outside the set.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "internet_access" => Some(Policy::InternetAccess),
            "restricted" => Some(Policy::Restricted),
            _ => None,
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Segment Record ──────────────────────────────────────────────────────

/// One configured segment: identifier, name and policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// VLAN identifier.
    pub vlan_id: VlanId,
    /// Segment name, unique within a document.
    pub name: String,
    /// Policy applied to the segment.
    pub policy: Policy,
}

// ── Configuration Document ──────────────────────────────────────────────

/// An ordered sequence of segment records.
///
/// Record order is the intent's declaration order, never sorted. A document
/// with zero records is valid (the wire container is simply empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Segment records in declaration order.
    pub records: Vec<SegmentRecord>,
}

impl ConfigDocument {
    /// Wrap an ordered list of records.
    pub fn from_records(records: Vec<SegmentRecord>) -> Self {
        Self { records }
    }

    /// Number of segment records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document carries no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
