//! Error types for intent translation and document handling.

use thiserror::Error;

/// Errors that can occur while validating and translating an intent.
///
/// All of these are fatal to translation, surfaced immediately with a
/// precise reason, and never retried.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The intent is structurally malformed (e.g. a required mapping is
    /// missing or the file is not valid JSON).
    #[error("intent is structurally malformed: {0}")]
    Malformed(String),

    /// A VLAN identifier is outside the assignable range.
    #[error("VLAN id {value} for segment '{segment}' is outside [{min}, {max}]",
        min = netweave_types::VlanId::MIN, max = netweave_types::VlanId::MAX)]
    IdOutOfRange {
        /// Segment the identifier was declared for.
        segment: String,
        /// The offending value.
        value: i64,
    },

    /// A policy label is not in the closed enumeration.
    #[error("unknown policy '{label}' for segment '{segment}'")]
    UnknownPolicy {
        /// Segment the policy was declared for.
        segment: String,
        /// The offending label.
        label: String,
    },

    /// A segment has a VLAN id but no policy.
    #[error("segment '{segment}' has a VLAN id but no policy")]
    MissingPolicy {
        /// The segment lacking a policy entry.
        segment: String,
    },

    /// A policy was declared for a segment with no VLAN id.
    #[error("policy declared for unknown segment '{segment}'")]
    UnknownSegment {
        /// The segment lacking a VLAN entry.
        segment: String,
    },
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors raised when a persisted configuration document fails its strict
/// re-parse against the schema.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is not well-formed against the fixed grammar.
    #[error("malformed configuration document: {0}")]
    Syntax(String),

    /// The container namespace is not the fixed schema namespace.
    #[error("unexpected document namespace '{found}'")]
    Namespace {
        /// The namespace that was found (may be empty).
        found: String,
    },

    /// A segment identifier is not an integer.
    #[error("segment identifier '{text}' is not an integer")]
    InvalidId {
        /// The raw element text.
        text: String,
    },

    /// A segment identifier is outside the assignable range.
    #[error("segment identifier {value} is outside [{min}, {max}]",
        min = netweave_types::VlanId::MIN, max = netweave_types::VlanId::MAX)]
    IdOutOfRange {
        /// The offending value.
        value: i64,
    },

    /// A policy label is not in the closed enumeration.
    #[error("unknown policy '{label}' in document")]
    UnknownPolicy {
        /// The offending label.
        label: String,
    },
}

/// Result type for document codec operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_error_names_the_offender() {
        let err = TranslateError::IdOutOfRange {
            segment: "LAB".into(),
            value: 5000,
        };
        let message = err.to_string();
        assert!(message.contains("5000"));
        assert!(message.contains("LAB"));
        assert!(message.contains("[1, 4094]"));
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslateError>();
        assert_send_sync::<DocumentError>();
    }

    #[test]
    fn all_variants_display() {
        let variants: Vec<TranslateError> = vec![
            TranslateError::Malformed("a".into()),
            TranslateError::IdOutOfRange {
                segment: "b".into(),
                value: 0,
            },
            TranslateError::UnknownPolicy {
                segment: "c".into(),
                label: "d".into(),
            },
            TranslateError::MissingPolicy { segment: "e".into() },
            TranslateError::UnknownSegment { segment: "f".into() },
        ];
        for v in &variants {
            assert!(!v.to_string().is_empty());
        }
    }
}
