//! Pure guard-rail evaluation (no IO).
//!
//! Input: a construct tree built elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod aspect;
pub mod checks;
pub mod model;
pub mod policy;
pub mod report;
pub mod sink;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use aspect::{GuardRailAspect, TraversalState};
pub use engine::{evaluate, walk};
pub use sink::DiagnosticSink;
