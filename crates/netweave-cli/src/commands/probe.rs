//! Probe command: open one protocol session and report what the peer said.

use super::EndpointArgs;
use crate::error::CliResult;
use crate::output::{print_error, print_info, print_success};
use netweave_deploy::NetconfSession;

pub async fn execute(args: EndpointArgs) -> CliResult<()> {
    let config = args.to_config();
    print_info(&format!(
        "probing {} (timeout {}s)",
        config.endpoint(),
        config.timeout.as_secs()
    ));

    match NetconfSession::open(&config).await {
        Ok(session) => {
            print_success("protocol session established");
            if let Some(id) = session.session_id() {
                print_info(&format!("peer assigned session id {}", id));
            }
            println!("peer capabilities:");
            for capability in session.peer_capabilities() {
                println!("  - {}", capability);
            }
            Ok(())
        }
        Err(err) => {
            print_error(&format!("probe failed: {}", err));
            println!("tips:");
            println!("  - start the banner mock: netweave mock-device --host 127.0.0.1 --port 1830");
            println!("  - override the endpoint: NETCONF_HOST=127.0.0.1 NETCONF_PORT=1830 netweave probe");
            println!("  - for real devices, ensure the configuration protocol is enabled and the port is open");
            Err(err.into())
        }
    }
}
