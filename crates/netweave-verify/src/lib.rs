//! # netweave-verify
//!
//! Read-only verification client for a Prometheus monitoring backend.
//!
//! This is an independent confirmation step that runs after a deployment:
//! the core pipeline never depends on its result. It issues instant
//! queries over the Prometheus HTTP API and returns plain
//! {labels, timestamp, value} samples for the caller to render.

#![deny(unsafe_code)]

pub mod client;
pub mod error;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use client::{MetricSample, PrometheusClient, DEFAULT_HEALTH_QUERIES};
pub use error::{VerifyError, VerifyResult};
