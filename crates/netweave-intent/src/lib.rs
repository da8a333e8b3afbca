//! # netweave-intent
//!
//! Intent compilation: validates a declarative network intent and
//! translates it into a schema-compliant configuration document.
//!
//! ```text
//! intent JSON ──▶ parse_intent ──▶ translate ──▶ ConfigDocument
//!                                                   │
//!                                  xml::to_xml_document (persist)
//!                                  xml::parse_xml      (re-load, strict)
//! ```
//!
//! Translation is pure and order-preserving: the nth segment record in the
//! output is the nth segment declared in the intent, and identical input
//! yields byte-identical documents. All validation failures name the
//! offending segment, identifier or label.

#![deny(unsafe_code)]

pub mod error;
pub mod schema;
pub mod translate;
pub mod xml;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use error::{DocumentError, DocumentResult, TranslateError, TranslateResult};
pub use translate::{parse_intent, translate};
pub use xml::{parse_xml, to_xml, to_xml_document};

#[cfg(test)]
mod tests {
    use super::*;
    use netweave_types::VlanId;

    const CAMPUS_INTENT: &str = r#"{
        "description": "Campus LAN segmentation policy",
        "vlans": {"CS": 10, "ECE": 20, "ADMIN": 30},
        "policies": {
            "CS": "internet_access",
            "ECE": "internet_access",
            "ADMIN": "restricted"
        }
    }"#;

    #[test]
    fn end_to_end_intent_to_persisted_document() {
        let intent = parse_intent(CAMPUS_INTENT).unwrap();
        let doc = translate(&intent).unwrap();

        let names: Vec<&str> = doc.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["CS", "ECE", "ADMIN"]);

        let persisted = to_xml_document(&doc);
        assert_eq!(parse_xml(&persisted).unwrap(), doc);

        // Translating the same source twice yields identical bytes.
        let again = translate(&parse_intent(CAMPUS_INTENT).unwrap()).unwrap();
        assert_eq!(to_xml_document(&again), persisted);
    }

    #[test]
    fn out_of_range_intent_never_produces_a_document() {
        let source = r#"{
            "vlans": {"LAB": 5000},
            "policies": {"LAB": "restricted"}
        }"#;
        let intent = parse_intent(source).unwrap();
        let err = translate(&intent).unwrap_err();
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn schema_constants_shape_the_wire_form() {
        let intent = parse_intent(CAMPUS_INTENT).unwrap();
        let xml = to_xml(&translate(&intent).unwrap());
        assert!(xml.contains(schema::NAMESPACE));
        assert!(xml.starts_with(&format!("<{}", schema::CONTAINER_ELEMENT)));
        assert_eq!(xml.matches(&format!("<{}>", schema::SEGMENT_ELEMENT)).count(), 3);
        assert!(VlanId::new(10).is_some());
    }
}
