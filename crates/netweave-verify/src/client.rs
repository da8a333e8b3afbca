//! HTTP client for the Prometheus instant-query API.

use crate::error::{VerifyError, VerifyResult};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Health expressions queried by default after a deployment, with a short
/// description for display.
pub const DEFAULT_HEALTH_QUERIES: [(&str, &str); 2] = [
    ("up", "general scrape target up/down status"),
    ("node_network_up", "network interface up/down status"),
];

/// One sample returned by an instant query.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// Metric labels, including `__name__`.
    pub labels: HashMap<String, String>,
    /// Sample timestamp (seconds since the epoch).
    pub timestamp: f64,
    /// Sample value as reported by the backend.
    pub value: String,
}

/// Read-only client for a Prometheus backend.
pub struct PrometheusClient {
    client: Client,
    base_url: String,
}

// Wire shape of /api/v1/query responses.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<QueryData>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(default)]
    result: Vec<VectorSample>,
}

#[derive(Debug, Deserialize)]
struct VectorSample {
    metric: HashMap<String, String>,
    value: (f64, String),
}

impl PrometheusClient {
    /// Create a client for the given backend endpoint.
    pub fn new(base_url: &str) -> VerifyResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The backend endpoint this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Cheap reachability check against the backend's health endpoint.
    pub async fn check_connection(&self) -> VerifyResult<()> {
        let url = format!("{}/-/healthy", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(VerifyError::Api {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    /// Run one instant query and return its vector samples.
    pub async fn instant_query(&self, expr: &str) -> VerifyResult<Vec<MetricSample>> {
        debug!(query = expr, "running instant query");
        let url = format!("{}/api/v1/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", expr)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VerifyError::Api {
                status: response.status().as_u16(),
            });
        }

        let body: QueryResponse = response.json().await?;
        if body.status != "success" {
            return Err(VerifyError::Backend(
                body.error.unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }

        let samples = body
            .data
            .map(|data| data.result)
            .unwrap_or_default()
            .into_iter()
            .map(|sample| MetricSample {
                labels: sample.metric,
                timestamp: sample.value.0,
                value: sample.value.1,
            })
            .collect();
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalization() {
        let client = PrometheusClient::new("http://localhost:9090/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9090");
    }

    #[test]
    fn decodes_vector_responses() {
        let body = r#"{
            "status": "success",
            "data": {
                "resultType": "vector",
                "result": [
                    {
                        "metric": {"__name__": "up", "instance": "localhost:9100", "job": "node"},
                        "value": [1722260000.123, "1"]
                    }
                ]
            }
        }"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, "success");
        let data = parsed.data.unwrap();
        assert_eq!(data.result.len(), 1);
        assert_eq!(data.result[0].value.1, "1");
        assert_eq!(
            data.result[0].metric.get("__name__").map(String::as_str),
            Some("up")
        );
    }

    #[test]
    fn decodes_backend_errors() {
        let body = r#"{"status": "error", "errorType": "bad_data", "error": "parse error"}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, "error");
        assert_eq!(parsed.error.as_deref(), Some("parse error"));
        assert!(parsed.data.is_none());
    }

    #[test]
    fn default_queries_cover_targets_and_interfaces() {
        let names: Vec<&str> = DEFAULT_HEALTH_QUERIES.iter().map(|(q, _)| *q).collect();
        assert_eq!(names, vec!["up", "node_network_up"]);
    }
}
