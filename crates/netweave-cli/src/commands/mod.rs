//! Command implementations

pub mod apply;
pub mod deploy;
pub mod mock;
pub mod probe;
pub mod translate;
pub mod verify;

use clap::Args;
use netweave_types::EndpointConfig;
use std::time::Duration;

/// Endpoint flags shared by the device-facing commands, each overridable
/// via the environment.
#[derive(Args, Debug, Clone)]
pub struct EndpointArgs {
    /// Device hostname or address
    #[arg(long, env = "NETCONF_HOST", default_value = "192.168.1.10")]
    pub host: String,

    /// Protocol port
    #[arg(long, env = "NETCONF_PORT", default_value_t = 830)]
    pub port: u16,

    /// Login user
    #[arg(long, env = "NETCONF_USER", default_value = "admin")]
    pub username: String,

    /// Login password
    #[arg(long, env = "NETCONF_PASS", default_value = "admin")]
    pub password: String,

    /// Session timeout in seconds
    #[arg(long, env = "TIMEOUT", default_value_t = 10)]
    pub timeout: u64,
}

impl EndpointArgs {
    /// Resolve the flags into the endpoint configuration handed to the
    /// pipeline. Built once here, at the process boundary.
    pub fn to_config(&self) -> EndpointConfig {
        EndpointConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_args_resolve_to_config() {
        let args = EndpointArgs {
            host: "10.0.0.1".to_string(),
            port: 1830,
            username: "operator".to_string(),
            password: "secret".to_string(),
            timeout: 3,
        };
        let config = args.to_config();
        assert_eq!(config.endpoint(), "10.0.0.1:1830");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.username, "operator");
    }
}
