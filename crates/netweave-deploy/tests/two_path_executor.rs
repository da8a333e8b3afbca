//! End-to-end exercises of the two-path executor against in-process TCP
//! devices: a well-behaved device (live path), a banner-only device that
//! never answers RPCs (fallback mid-session), and endpoints that refuse
//! the connection outright (fallback at open).

use netweave_deploy::{deploy, deploy_with_options, DeployOptions, COMMIT_MARKER};
use netweave_types::{
    ConfigDocument, DeployPath, EndpointConfig, OutcomeStatus, Policy, SegmentRecord, VlanId,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const DELIMITER: &[u8] = b"]]>]]>";

const SERVER_HELLO: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<hello xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\">\
<capabilities><capability>urn:ietf:params:netconf:base:1.0</capability></capabilities>\
<session-id>1</session-id></hello>";

const OK_REPLY: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<rpc-reply message-id=\"101\" xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\"><ok/></rpc-reply>";

fn campus_document() -> ConfigDocument {
    ConfigDocument::from_records(vec![
        SegmentRecord {
            vlan_id: VlanId(10),
            name: "CS".to_string(),
            policy: Policy::InternetAccess,
        },
        SegmentRecord {
            vlan_id: VlanId(20),
            name: "ECE".to_string(),
            policy: Policy::InternetAccess,
        },
        SegmentRecord {
            vlan_id: VlanId(30),
            name: "ADMIN".to_string(),
            policy: Policy::Restricted,
        },
    ])
}

fn endpoint_for(addr: SocketAddr) -> EndpointConfig {
    EndpointConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        timeout: Duration::from_secs(2),
        ..EndpointConfig::default()
    }
}

async fn read_frame(stream: &mut tokio::net::TcpStream) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        if buffer
            .windows(DELIMITER.len())
            .any(|window| window == DELIMITER)
        {
            return buffer;
        }
        let read = stream.read(&mut chunk).await.unwrap();
        if read == 0 {
            return buffer;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }
}

/// A device that completes the hello exchange and acknowledges one
/// edit-config with `<ok/>`.
async fn spawn_full_device() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_frame(&mut stream).await; // client hello
        stream.write_all(SERVER_HELLO.as_bytes()).await.unwrap();
        stream.write_all(DELIMITER).await.unwrap();
        read_frame(&mut stream).await; // edit-config rpc
        stream.write_all(OK_REPLY.as_bytes()).await.unwrap();
        stream.write_all(DELIMITER).await.unwrap();
    });
    addr
}

/// A banner-only device: sends its hello, then closes. Sufficient for
/// reachability checks, insufficient for a deployment session.
async fn spawn_banner_device() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        stream.write_all(SERVER_HELLO.as_bytes()).await.unwrap();
        stream.write_all(DELIMITER).await.unwrap();
        stream.shutdown().await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
async fn unreachable_endpoint() -> EndpointConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    endpoint_for(addr)
}

#[tokio::test]
async fn live_path_succeeds_against_a_full_device() {
    let addr = spawn_full_device().await;
    let outcome = deploy(&campus_document(), &endpoint_for(addr)).await;

    assert_eq!(outcome.path, DeployPath::Live);
    assert!(outcome.is_success());
    assert!(outcome.fallback_reason.is_none());
    assert_eq!(outcome.confirmations.len(), 3);
    assert!(outcome.confirmations.iter().all(|c| c.status == "ok"));
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_to_simulation() {
    let endpoint = unreachable_endpoint().await;
    let outcome = deploy(&campus_document(), &endpoint).await;

    assert_eq!(outcome.path, DeployPath::Simulated);
    assert!(outcome.is_success());
    let reason = outcome.fallback_reason.as_deref().unwrap();
    assert!(reason.contains("transport failure"), "reason: {}", reason);

    // Confirmations in document order, one per record.
    let names: Vec<&str> = outcome
        .confirmations
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["CS", "ECE", "ADMIN"]);
    assert!(outcome
        .confirmations
        .iter()
        .all(|c| c.status == "applied"));
    assert!(outcome.trace.iter().any(|line| line == COMMIT_MARKER));
}

#[tokio::test]
async fn banner_only_device_falls_back_mid_session() {
    let addr = spawn_banner_device().await;
    let outcome = deploy(&campus_document(), &endpoint_for(addr)).await;

    assert_eq!(outcome.path, DeployPath::Simulated);
    assert!(outcome.is_success());
    assert!(outcome.fallback_reason.is_some());
    assert_eq!(outcome.confirmations.len(), 3);
}

#[tokio::test]
async fn strict_mode_reports_the_live_failure() {
    let endpoint = unreachable_endpoint().await;
    let options = DeployOptions { strict: true };
    let outcome = deploy_with_options(&campus_document(), &endpoint, &options).await;

    assert_eq!(outcome.path, DeployPath::Live);
    assert!(!outcome.is_success());
    assert!(outcome.confirmations.is_empty());
    match &outcome.status {
        OutcomeStatus::Failed { reason } => assert!(reason.contains("transport failure")),
        other => panic!("expected failed status, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_document_fails_with_no_further_fallback() {
    let doc = ConfigDocument::from_records(vec![SegmentRecord {
        vlan_id: VlanId(0),
        name: "GHOST".to_string(),
        policy: Policy::Restricted,
    }]);
    let endpoint = unreachable_endpoint().await;
    let outcome = deploy(&doc, &endpoint).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.path, DeployPath::Simulated);
    match &outcome.status {
        OutcomeStatus::Failed { reason } => assert!(reason.contains("GHOST")),
        other => panic!("expected failed status, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_document_deploys_as_a_bare_commit() {
    let endpoint = unreachable_endpoint().await;
    let outcome = deploy(&ConfigDocument::from_records(vec![]), &endpoint).await;

    assert!(outcome.is_success());
    assert!(outcome.confirmations.is_empty());
}
