//! Verify command: read-only health queries against the metrics backend.

use crate::error::CliResult;
use crate::output::{self, print_error, print_info, print_success, print_warning, OutputFormat};
use clap::Args;
use netweave_verify::{MetricSample, PrometheusClient, DEFAULT_HEALTH_QUERIES};
use serde::Serialize;
use tabled::Tabled;

/// Arguments for `netweave verify`
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Monitoring backend endpoint
    #[arg(long, env = "PROMETHEUS_URL", default_value = "http://localhost:9090")]
    pub prometheus: String,

    /// Instant-query expression to run (repeatable; defaults to target and
    /// interface health)
    #[arg(long = "query")]
    pub queries: Vec<String>,
}

/// Table row for metric sample display
#[derive(Debug, Serialize, Tabled)]
struct SampleRow {
    /// Metric name
    metric: String,
    /// Scraped instance
    instance: String,
    /// Sample value
    value: String,
    /// Sample timestamp (epoch seconds)
    timestamp: String,
}

impl From<&MetricSample> for SampleRow {
    fn from(sample: &MetricSample) -> Self {
        let label = |key: &str| {
            sample
                .labels
                .get(key)
                .cloned()
                .unwrap_or_else(|| "-".to_string())
        };
        Self {
            metric: label("__name__"),
            instance: label("instance"),
            value: sample.value.clone(),
            timestamp: format!("{:.3}", sample.timestamp),
        }
    }
}

pub async fn execute(args: VerifyArgs, format: OutputFormat) -> CliResult<()> {
    let client = PrometheusClient::new(&args.prometheus)?;
    print_info(&format!("connecting to metrics backend at {}", client.base_url()));
    client.check_connection().await?;
    print_success("metrics backend reachable");

    let queries: Vec<(String, String)> = if args.queries.is_empty() {
        DEFAULT_HEALTH_QUERIES
            .iter()
            .map(|(expr, description)| (expr.to_string(), description.to_string()))
            .collect()
    } else {
        args.queries
            .iter()
            .map(|expr| (expr.clone(), "caller-supplied query".to_string()))
            .collect()
    };

    for (expr, description) in queries {
        print_info(&format!("querying: {} ({})", expr, description));
        match client.instant_query(&expr).await {
            Ok(samples) if samples.is_empty() => {
                print_warning(&format!("no samples for {}", expr));
            }
            Ok(samples) => {
                let rows: Vec<SampleRow> = samples.iter().map(SampleRow::from).collect();
                output::print_output(rows, format);
            }
            Err(err) => {
                // A failing query does not abort the remaining checks.
                print_error(&format!("query {} failed: {}", expr, err));
            }
        }
    }

    print_info("verification complete");
    Ok(())
}
