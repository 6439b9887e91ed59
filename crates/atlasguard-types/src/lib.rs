//! Stable DTOs and IDs used across the atlasguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - construct-tree node paths
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::NodePath;
pub use receipt::{
    AtlasguardData, AtlasguardReport, Finding, ReportEnvelope, ReportVerdict, RunMeta,
    SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, VerdictCounts,
};
