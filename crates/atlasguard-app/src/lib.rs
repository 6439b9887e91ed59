//! Use case orchestration for atlasguard.
//!
//! This crate provides the application layer: use cases that coordinate the tree loader, the
//! settings resolver, the domain engine and the renderers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod params;
mod render;
mod report;
mod schema;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use params::{DEFAULT_PARAMS_FILE, ParamsError, parameter_args};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use schema::{SchemaKind, schema_json};
