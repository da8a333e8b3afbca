//! Endpoint configuration for the managed device.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Standard port for the configuration protocol.
pub const DEFAULT_PORT: u16 = 830;

/// Where and how to reach the managed device.
///
/// Constructed once at the process boundary (flags and environment
/// overrides) and passed into `deploy` as a value; there is no hidden
/// global state behind it. Every field is independently overridable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Device hostname or address.
    pub host: String,

    /// Protocol port.
    pub port: u16,

    /// Login user.
    pub username: String,

    /// Login password.
    pub password: String,

    /// Bound on the session open and on each protocol exchange.
    #[serde(with = "duration_serde")]
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: "192.168.1.10".to_string(),
            port: DEFAULT_PORT,
            username: "admin".to_string(),
            password: "admin".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl EndpointConfig {
    /// The `host:port` form used in traces and outcome records.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Serde helper for Duration, carried as whole seconds.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_device_conventions() {
        let config = EndpointConfig::default();
        assert_eq!(config.host, "192.168.1.10");
        assert_eq!(config.port, 830);
        assert_eq!(config.username, "admin");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.endpoint(), "192.168.1.10:830");
    }

    #[test]
    fn timeout_serializes_as_seconds() {
        let config = EndpointConfig {
            timeout: Duration::from_secs(3),
            ..EndpointConfig::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["timeout"], 3);

        let back: EndpointConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back.timeout, Duration::from_secs(3));
    }
}
