//! Rendering and strict parsing of the configuration document wire format.
//!
//! The grammar is fixed by the schema model: one container element in the
//! fixed namespace, zero or more segment elements, each with exactly three
//! children in order. The renderer emits a canonical single-line form so
//! repeated translations of the same intent are byte-for-byte identical;
//! the parser accepts only that shape (plus insignificant whitespace and an
//! optional XML declaration) and re-validates every value against the
//! schema, so a document that round-trips here is schema-valid.

use crate::error::{DocumentError, DocumentResult};
use crate::schema;
use netweave_types::{ConfigDocument, Policy, SegmentRecord, VlanId};

/// Render the canonical wire form of a document, without an XML
/// declaration. This is the exact payload embedded in the protocol
/// edit-config request.
pub fn to_xml(doc: &ConfigDocument) -> String {
    let mut xml = String::new();
    xml.push_str(&format!(
        "<{} xmlns=\"{}\">",
        schema::CONTAINER_ELEMENT,
        schema::NAMESPACE
    ));
    for record in &doc.records {
        xml.push_str(&format!(
            "<{seg}><{id}>{}</{id}><{name}>{}</{name}><{policy}>{}</{policy}></{seg}>",
            record.vlan_id,
            escape_text(&record.name),
            record.policy,
            seg = schema::SEGMENT_ELEMENT,
            id = schema::ID_ELEMENT,
            name = schema::NAME_ELEMENT,
            policy = schema::POLICY_ELEMENT,
        ));
    }
    xml.push_str(&format!("</{}>", schema::CONTAINER_ELEMENT));
    xml
}

/// Render the persisted file form: XML declaration, canonical body,
/// trailing newline.
pub fn to_xml_document(doc: &ConfigDocument) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n", to_xml(doc))
}

/// Parse a persisted document, re-validating every value against the
/// schema. Rejects wrong namespaces, unexpected elements, out-of-range
/// identifiers and unknown policies.
pub fn parse_xml(input: &str) -> DocumentResult<ConfigDocument> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    if cursor.eat("<?xml") {
        cursor.read_through("?>")?;
    }

    cursor.skip_whitespace();
    cursor.expect(&format!("<{}", schema::CONTAINER_ELEMENT))?;
    let attributes = cursor.read_until(">")?;
    cursor.expect(">")?;
    if !attributes.is_empty() && !attributes.starts_with(char::is_whitespace) {
        return Err(DocumentError::Syntax(format!(
            "unexpected root element <{}{}>",
            schema::CONTAINER_ELEMENT,
            attributes
        )));
    }
    check_namespace(attributes)?;

    let container_close = format!("</{}>", schema::CONTAINER_ELEMENT);
    let mut records = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.eat(&container_close) {
            break;
        }
        records.push(parse_segment(&mut cursor)?);
    }

    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(DocumentError::Syntax(format!(
            "trailing content after </{}>",
            schema::CONTAINER_ELEMENT
        )));
    }

    Ok(ConfigDocument::from_records(records))
}

fn parse_segment(cursor: &mut Cursor<'_>) -> DocumentResult<SegmentRecord> {
    cursor.expect(&format!("<{}>", schema::SEGMENT_ELEMENT))?;

    let id_text = parse_child(cursor, schema::ID_ELEMENT)?;
    let name = parse_child(cursor, schema::NAME_ELEMENT)?;
    let policy_label = parse_child(cursor, schema::POLICY_ELEMENT)?;

    cursor.skip_whitespace();
    cursor.expect(&format!("</{}>", schema::SEGMENT_ELEMENT))?;

    let raw_id: i64 = id_text
        .trim()
        .parse()
        .map_err(|_| DocumentError::InvalidId {
            text: id_text.trim().to_string(),
        })?;
    let vlan_id = VlanId::new(raw_id).ok_or(DocumentError::IdOutOfRange { value: raw_id })?;
    let policy = Policy::parse(policy_label.trim()).ok_or_else(|| DocumentError::UnknownPolicy {
        label: policy_label.trim().to_string(),
    })?;

    Ok(SegmentRecord {
        vlan_id,
        name,
        policy,
    })
}

fn parse_child(cursor: &mut Cursor<'_>, element: &str) -> DocumentResult<String> {
    cursor.skip_whitespace();
    cursor.expect(&format!("<{}>", element))?;
    let text = cursor.read_until("<")?;
    cursor.expect(&format!("</{}>", element))?;
    unescape_text(text)
}

fn check_namespace(attributes: &str) -> DocumentResult<()> {
    let found = attributes
        .split_once("xmlns=\"")
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(value, _)| value)
        .unwrap_or("");
    if found != schema::NAMESPACE {
        return Err(DocumentError::Namespace {
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Escape the characters the wire format reserves in element text.
fn escape_text(text: &str) -> String {
    if !text.contains(['&', '<', '>']) {
        return text.to_string();
    }
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape_text(text: &str) -> DocumentResult<String> {
    if !text.contains('&') {
        return Ok(text.to_string());
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let entity_end = rest.find(';').ok_or_else(|| {
            DocumentError::Syntax("unterminated character entity".to_string())
        })?;
        match &rest[..=entity_end] {
            "&amp;" => out.push('&'),
            "&lt;" => out.push('<'),
            "&gt;" => out.push('>'),
            "&quot;" => out.push('"'),
            "&apos;" => out.push('\''),
            other => {
                return Err(DocumentError::Syntax(format!(
                    "unsupported character entity '{}'",
                    other
                )))
            }
        }
        rest = &rest[entity_end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

// ── Cursor ──────────────────────────────────────────────────────────────

/// Byte-offset scanner over the document source.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Consume `literal` if the input continues with it.
    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume `literal` or fail with the surrounding context.
    fn expect(&mut self, literal: &str) -> DocumentResult<()> {
        if self.eat(literal) {
            Ok(())
        } else {
            let found: String = self.rest().chars().take(24).collect();
            Err(DocumentError::Syntax(format!(
                "expected '{}', found '{}'",
                literal, found
            )))
        }
    }

    /// Return the text up to (not including) `delimiter`, leaving the
    /// cursor on the delimiter.
    fn read_until(&mut self, delimiter: &str) -> DocumentResult<&'a str> {
        match self.rest().find(delimiter) {
            Some(offset) => {
                let text = &self.rest()[..offset];
                self.pos += offset;
                Ok(text)
            }
            None => Err(DocumentError::Syntax(format!(
                "unterminated content, expected '{}'",
                delimiter
            ))),
        }
    }

    /// Skip past the next occurrence of `delimiter`.
    fn read_through(&mut self, delimiter: &str) -> DocumentResult<()> {
        self.read_until(delimiter)?;
        self.pos += delimiter.len();
        Ok(())
    }
}
