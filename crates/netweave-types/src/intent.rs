//! The declarative network intent.
//!
//! An intent maps segment names to VLAN identifiers and to policy labels.
//! Both mappings preserve insertion order, which is what makes repeated
//! translations of the same intent byte-for-byte reproducible downstream.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A declarative statement of desired network policy.
///
/// Created by an external author (typically a JSON file), read once per
/// translation run, never mutated. The identifier values are carried wide
/// (`i64`) on purpose: range enforcement happens at translation time so that
/// an out-of-range value produces a precise validation failure instead of a
/// deserialization error or a silent clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Free-text description of what this intent is meant to achieve.
    #[serde(default)]
    pub description: String,

    /// Segment name to VLAN identifier, in declaration order.
    pub vlans: IndexMap<String, i64>,

    /// Segment name to policy label, keyed identically to `vlans`.
    pub policies: IndexMap<String, String>,
}

impl Intent {
    /// Number of segments declared by this intent.
    pub fn segment_count(&self) -> usize {
        self.vlans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_preserves_declaration_order() {
        let json = r#"{
            "description": "campus policy",
            "vlans": {"CS": 10, "ECE": 20, "ADMIN": 30},
            "policies": {"CS": "internet_access", "ECE": "internet_access", "ADMIN": "restricted"}
        }"#;

        let intent: Intent = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = intent.vlans.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["CS", "ECE", "ADMIN"]);
        assert_eq!(intent.segment_count(), 3);
    }

    #[test]
    fn description_is_optional() {
        let json = r#"{"vlans": {"A": 1}, "policies": {"A": "restricted"}}"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert!(intent.description.is_empty());
    }

    #[test]
    fn missing_mapping_is_a_deserialization_error() {
        let json = r#"{"vlans": {"A": 1}}"#;
        assert!(serde_json::from_str::<Intent>(json).is_err());
    }
}
