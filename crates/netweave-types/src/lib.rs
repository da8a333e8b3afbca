//! Netweave Types - Core types for intent-driven network configuration
//!
//! Netweave compiles a declarative network intent into a schema-fixed
//! configuration document and deploys it to a managed device, falling back
//! to a deterministic simulation when the device cannot be reached.
//!
//! ## Architectural Boundaries
//!
//! - **netweave-intent** owns: intent validation, translation, document codec
//! - **netweave-deploy** owns: protocol session, two-path executor, simulation
//! - **netweave-verify** owns: read-only post-deployment metric checks
//!
//! This crate holds only the shared data model; it performs no I/O and makes
//! no policy decisions.
//!
//! ## Key Concepts
//!
//! - **Intent**: segment-name to VLAN-id and segment-name to policy mappings
//! - **ConfigDocument**: ordered segment records, the protocol payload
//! - **EndpointConfig**: where and how to reach the managed device
//! - **DeploymentOutcome**: the single normalized result of one attempt,
//!   live or simulated

#![deny(unsafe_code)]

pub mod document;
pub mod endpoint;
pub mod intent;
pub mod outcome;

// Re-export main types
pub use document::{ConfigDocument, Policy, SegmentRecord, VlanId};
pub use endpoint::EndpointConfig;
pub use intent::Intent;
pub use outcome::{
    AttemptId, Confirmation, DeployPath, DeploymentOutcome, OutcomeStatus,
};
