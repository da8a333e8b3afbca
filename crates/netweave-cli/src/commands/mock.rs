//! Mock device command: a banner-only TCP listener.
//!
//! Proves that a port is open and reachable; nothing more. The banner is
//! sent without end-of-message framing and no further frames ever follow,
//! so a real protocol session cannot complete against it -- `probe`
//! reports a session failure, while `nc`/raw TCP checks see the greeting.

use crate::error::CliResult;
use crate::output::{print_info, print_success};
use clap::Args;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

const HELLO_BANNER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<hello xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
  <capabilities>
    <capability>urn:ietf:params:netconf:base:1.0</capability>
  </capabilities>
</hello>
"#;

/// Arguments for `netweave mock-device`
#[derive(Args, Debug)]
pub struct MockDeviceArgs {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Listen port
    #[arg(long, default_value_t = 1830)]
    pub port: u16,
}

pub async fn execute(args: MockDeviceArgs) -> CliResult<()> {
    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    print_success(&format!(
        "mock device listening on {}:{}",
        args.host, args.port
    ));
    print_info("banner-only: real protocol sessions will not complete against this device");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                print_info("shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                tokio::spawn(handle_connection(stream, peer));
            }
        }
    }
}

async fn handle_connection(mut stream: TcpStream, peer: SocketAddr) {
    info!(%peer, "connection accepted");

    if let Err(err) = stream.write_all(HELLO_BANNER.as_bytes()).await {
        warn!(%peer, error = %err, "failed to send banner");
        return;
    }

    // Log whatever the client sends within a short grace period, then close.
    let mut buffer = [0u8; 4096];
    match tokio::time::timeout(std::time::Duration::from_secs(2), stream.read(&mut buffer)).await {
        Ok(Ok(read)) if read > 0 => {
            info!(%peer, bytes = read, "received data");
        }
        Ok(Ok(_)) => {}
        Ok(Err(err)) => warn!(%peer, error = %err, "read failed"),
        Err(_) => {}
    }

    let _ = stream.shutdown().await;
    info!(%peer, "connection closed");
}
