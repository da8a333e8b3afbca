//! Minimal configuration-protocol session over TCP.
//!
//! One session performs exactly one unit of work: a hello exchange at open,
//! then a single edit-config against the running datastore (apply and
//! commit in one operation). There is no locking, no candidate datastore,
//! no capability negotiation beyond requiring the base capability, and no
//! retry -- a failed session is reported once and the executor decides what
//! happens next.
//!
//! Every read and write is bounded by the endpoint timeout. Frames use the
//! classic `]]>]]>` end-of-message delimiter.
//!
//! Credential note: the minimal TCP transport has no in-band credential
//! exchange; a peer that enforces authentication rejects the edit-config
//! with an `access-denied` error, which classifies as [`SessionError::Auth`].

use crate::error::{SessionError, SessionResult};
use netweave_intent::to_xml;
use netweave_types::{ConfigDocument, EndpointConfig};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::debug;

/// Base protocol capability the peer must advertise.
pub const BASE_CAPABILITY: &str = "urn:ietf:params:netconf:base:1.0";

const PROTOCOL_NAMESPACE: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";
const FRAME_DELIMITER: &[u8] = b"]]>]]>";
const MAX_FRAME_BYTES: usize = 1 << 20;

/// Reply to the single apply-and-commit operation.
#[derive(Debug, Clone)]
pub struct RpcReply {
    /// Whether the peer acknowledged with `<ok/>`.
    pub ok: bool,
    /// Raw reply frame, kept for the outcome trace.
    pub raw: String,
}

/// An established protocol session.
///
/// Opening the session owns the connect and hello exchange; the connection
/// closes when the session is dropped.
pub struct NetconfSession {
    stream: TcpStream,
    io_timeout: Duration,
    residual: Vec<u8>,
    peer_capabilities: Vec<String>,
    session_id: Option<u64>,
}

impl NetconfSession {
    /// Connect and perform the hello exchange, all within the configured
    /// timeout.
    pub async fn open(config: &EndpointConfig) -> SessionResult<Self> {
        let endpoint = config.endpoint();
        debug!(endpoint = %endpoint, "opening protocol session");

        let connect = TcpStream::connect((config.host.as_str(), config.port));
        let stream = timeout(config.timeout, connect)
            .await
            .map_err(|_| {
                SessionError::Transport(format!(
                    "connection to {} timed out after {}s",
                    endpoint,
                    config.timeout.as_secs()
                ))
            })?
            .map_err(|e| SessionError::Transport(format!("cannot connect to {}: {}", endpoint, e)))?;

        let mut session = Self {
            stream,
            io_timeout: config.timeout,
            residual: Vec::new(),
            peer_capabilities: Vec::new(),
            session_id: None,
        };

        session.send_frame(client_hello().as_bytes()).await?;
        let hello = session.read_frame().await?;

        session.peer_capabilities = extract_all(&hello, "capability");
        session.session_id = extract_one(&hello, "session-id").and_then(|s| s.trim().parse().ok());

        if !session
            .peer_capabilities
            .iter()
            .any(|c| c.trim().starts_with(BASE_CAPABILITY))
        {
            return Err(SessionError::Protocol(format!(
                "peer hello does not advertise {}",
                BASE_CAPABILITY
            )));
        }

        debug!(
            capabilities = session.peer_capabilities.len(),
            session_id = ?session.session_id,
            "protocol session established"
        );
        Ok(session)
    }

    /// Capabilities advertised in the peer's hello.
    pub fn peer_capabilities(&self) -> &[String] {
        &self.peer_capabilities
    }

    /// Session identifier assigned by the peer, if any.
    pub fn session_id(&self) -> Option<u64> {
        self.session_id
    }

    /// Issue the single apply-and-commit operation carrying the full
    /// configuration document.
    pub async fn apply_and_commit(&mut self, doc: &ConfigDocument) -> SessionResult<RpcReply> {
        let rpc = edit_config_rpc(doc);
        self.send_frame(rpc.as_bytes()).await?;
        let reply = self.read_frame().await?;
        classify_reply(&reply)
    }

    async fn send_frame(&mut self, payload: &[u8]) -> SessionResult<()> {
        let io_timeout = self.io_timeout;
        let write = async {
            self.stream.write_all(payload).await?;
            self.stream.write_all(FRAME_DELIMITER).await?;
            self.stream.flush().await
        };
        timeout(io_timeout, write)
            .await
            .map_err(|_| {
                SessionError::Transport(format!(
                    "write timed out after {}s",
                    io_timeout.as_secs()
                ))
            })?
            .map_err(|e| SessionError::Transport(format!("write failed: {}", e)))
    }

    async fn read_frame(&mut self) -> SessionResult<String> {
        let timeout_secs = self.io_timeout.as_secs();
        let deadline = Instant::now() + self.io_timeout;
        let mut buffer = std::mem::take(&mut self.residual);

        loop {
            if let Some(pos) = find_delimiter(&buffer) {
                let frame = buffer[..pos].to_vec();
                self.residual = buffer[pos + FRAME_DELIMITER.len()..].to_vec();
                return String::from_utf8(frame)
                    .map_err(|_| SessionError::Protocol("peer frame is not valid UTF-8".into()));
            }
            if buffer.len() > MAX_FRAME_BYTES {
                return Err(SessionError::Protocol("peer frame exceeds 1 MiB".into()));
            }

            let mut chunk = [0u8; 4096];
            let read = timeout_at(deadline, self.stream.read(&mut chunk))
                .await
                .map_err(|_| {
                    SessionError::Transport(format!("read timed out after {}s", timeout_secs))
                })?
                .map_err(|e| SessionError::Transport(format!("read failed: {}", e)))?;
            if read == 0 {
                return Err(SessionError::Transport("connection closed by peer".into()));
            }
            buffer.extend_from_slice(&chunk[..read]);
        }
    }
}

fn client_hello() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <hello xmlns=\"{ns}\"><capabilities>\
         <capability>{cap}</capability>\
         </capabilities></hello>",
        ns = PROTOCOL_NAMESPACE,
        cap = BASE_CAPABILITY,
    )
}

fn edit_config_rpc(doc: &ConfigDocument) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rpc message-id=\"101\" xmlns=\"{ns}\">\
         <edit-config><target><running/></target>\
         <config>{payload}</config>\
         </edit-config></rpc>",
        ns = PROTOCOL_NAMESPACE,
        payload = to_xml(doc),
    )
}

fn classify_reply(reply: &str) -> SessionResult<RpcReply> {
    if reply.contains("<ok/>") || reply.contains("<ok ") {
        return Ok(RpcReply {
            ok: true,
            raw: reply.trim().to_string(),
        });
    }
    if reply.contains("access-denied") {
        let detail = extract_one(reply, "error-message")
            .unwrap_or_else(|| "peer denied access".to_string());
        return Err(SessionError::Auth(detail.trim().to_string()));
    }
    if reply.contains("<rpc-error") {
        let detail = extract_one(reply, "error-message")
            .unwrap_or_else(|| "peer rejected the request".to_string());
        return Err(SessionError::Protocol(detail.trim().to_string()));
    }
    Err(SessionError::Protocol(
        "unexpected reply to edit-config".into(),
    ))
}

/// Extract the text of every `<element>...</element>` occurrence.
/// Namespace prefixes and attributes on the element are tolerated.
fn extract_all(xml: &str, element: &str) -> Vec<String> {
    let open = format!("<{}", element);
    let close = format!("</{}>", element);
    let mut found = Vec::new();
    let mut rest = xml;
    while let Some(start) = rest.find(&open) {
        rest = &rest[start + open.len()..];
        let Some(tag_end) = rest.find('>') else { break };
        // Skip self-closing and lookalike elements (<capabilities> vs <capability>)
        let attrs = &rest[..tag_end];
        let lookalike = !attrs.is_empty() && !attrs.starts_with(char::is_whitespace);
        if lookalike || attrs.ends_with('/') {
            continue;
        }
        rest = &rest[tag_end + 1..];
        let Some(end) = rest.find(&close) else { break };
        found.push(rest[..end].trim().to_string());
        rest = &rest[end + close.len()..];
    }
    found
}

fn extract_one(xml: &str, element: &str) -> Option<String> {
    extract_all(xml, element).into_iter().next()
}

fn find_delimiter(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(FRAME_DELIMITER.len())
        .position(|window| window == FRAME_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netweave_types::{Policy, SegmentRecord, VlanId};

    #[test]
    fn delimiter_search() {
        assert_eq!(find_delimiter(b"<hello/>]]>]]>tail"), Some(8));
        assert_eq!(find_delimiter(b"<hello/>]]>]]"), None);
        assert_eq!(find_delimiter(b""), None);
    }

    #[test]
    fn capability_extraction_tolerates_structure() {
        let hello = "<hello xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\">\n  <capabilities>\n    <capability>urn:ietf:params:netconf:base:1.0</capability>\n    <capability>urn:example:extra:1.1</capability>\n  </capabilities>\n  <session-id>7</session-id>\n</hello>";
        assert_eq!(
            extract_all(hello, "capability"),
            vec![
                "urn:ietf:params:netconf:base:1.0".to_string(),
                "urn:example:extra:1.1".to_string(),
            ]
        );
        assert_eq!(extract_one(hello, "session-id").as_deref(), Some("7"));
        assert_eq!(extract_one(hello, "absent"), None);
    }

    #[test]
    fn reply_classification() {
        assert!(classify_reply("<rpc-reply message-id=\"101\"><ok/></rpc-reply>").is_ok());

        let denied = "<rpc-reply><rpc-error><error-tag>access-denied</error-tag><error-message>bad credentials</error-message></rpc-error></rpc-reply>";
        assert!(matches!(
            classify_reply(denied),
            Err(SessionError::Auth(msg)) if msg == "bad credentials"
        ));

        let rejected = "<rpc-reply><rpc-error><error-message>invalid config</error-message></rpc-error></rpc-reply>";
        assert!(matches!(
            classify_reply(rejected),
            Err(SessionError::Protocol(msg)) if msg == "invalid config"
        ));

        assert!(matches!(
            classify_reply("<banana/>"),
            Err(SessionError::Protocol(_))
        ));
    }

    #[test]
    fn edit_config_embeds_the_document_payload() {
        let doc = ConfigDocument::from_records(vec![SegmentRecord {
            vlan_id: VlanId(10),
            name: "CS".to_string(),
            policy: Policy::InternetAccess,
        }]);
        let rpc = edit_config_rpc(&doc);
        assert!(rpc.contains("<edit-config><target><running/></target>"));
        assert!(rpc.contains(&to_xml(&doc)));
        assert!(rpc.contains("message-id=\"101\""));
    }

    #[test]
    fn client_hello_advertises_base_capability() {
        let hello = client_hello();
        assert!(hello.contains(BASE_CAPABILITY));
        assert!(hello.contains("<capabilities>"));
    }
}
