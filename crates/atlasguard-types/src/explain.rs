//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;
use crate::receipt::Severity;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// The guard rail this entry documents; codes point at their check.
    pub check_id: &'static str,
    pub code: &'static str,
    pub severity: Severity,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// The `atlasguard.toml` setting that tunes the check.
    pub config: &'static str,
    /// Before/after fragments of `tree.json`.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fragment that would trigger a finding.
    pub before: &'static str,
    /// Fragment that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_ATLAS_CLUSTER_COUNT => Some(explain_cluster_count()),
        ids::CHECK_ATLAS_BACKUP_ENABLED => Some(explain_backup_enabled()),
        ids::CHECK_ATLAS_INSTANCE_SIZES => Some(explain_instance_sizes()),

        // Codes
        ids::CODE_CLUSTER_LIMIT_EXCEEDED => Some(explain_cluster_limit_exceeded()),
        ids::CODE_BACKUP_DISABLED => Some(explain_backup_disabled()),
        ids::CODE_UNAPPROVED_INSTANCE_SIZE => Some(explain_unapproved_instance_size()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_ATLAS_CLUSTER_COUNT,
        ids::CHECK_ATLAS_BACKUP_ENABLED,
        ids::CHECK_ATLAS_INSTANCE_SIZES,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_CLUSTER_LIMIT_EXCEEDED,
        ids::CODE_BACKUP_DISABLED,
        ids::CODE_UNAPPROVED_INSTANCE_SIZE,
    ]
}

/// Each guard rail paired with the code it emits.
pub fn guard_rails() -> &'static [(&'static str, &'static str)] {
    &[
        (ids::CHECK_ATLAS_CLUSTER_COUNT, ids::CODE_CLUSTER_LIMIT_EXCEEDED),
        (ids::CHECK_ATLAS_BACKUP_ENABLED, ids::CODE_BACKUP_DISABLED),
        (ids::CHECK_ATLAS_INSTANCE_SIZES, ids::CODE_UNAPPROVED_INSTANCE_SIZE),
    ]
}

// --- Check-level explanations ---

fn explain_cluster_count() -> Explanation {
    Explanation {
        title: "Cluster Count Limit",
        check_id: ids::CHECK_ATLAS_CLUSTER_COUNT,
        code: ids::CODE_CLUSTER_LIMIT_EXCEEDED,
        severity: Severity::Error,
        description: "\
Counts the Atlas clusters declared in a single deployment stage and flags every
cluster beyond `max_cluster_count`.

Clusters are counted in tree order (parents before children, siblings in
declaration order). The first `max_cluster_count` clusters are never flagged;
each one after that produces an error naming how many clusters the stage
already defines.

Unbounded cluster sprawl is expensive:
- Every dedicated cluster is billed around the clock
- Each cluster adds backup, alerting and upgrade work
- Copy-pasted stacks tend to multiply clusters silently",
        remediation: "\
Consolidate workloads onto fewer clusters, split the deployment into separate
stages, or raise the limit.",
        config: "[guard_rails]\nmax_cluster_count = 1",
        examples: ExamplePair {
            before: r#"{
  "StackA": { "children": { "Cluster": { "attributes": {
    "aws:cdk:cloudformation:type": "MongoDB::Atlas::Cluster" } } } },
  "StackB": { "children": { "Cluster": { "attributes": {
    "aws:cdk:cloudformation:type": "MongoDB::Atlas::Cluster" } } } }
}"#,
            after: r#"{
  "StackA": { "children": { "Cluster": { "attributes": {
    "aws:cdk:cloudformation:type": "MongoDB::Atlas::Cluster" } } } },
  "StackB": { "children": { "Queue": { "attributes": {
    "aws:cdk:cloudformation:type": "AWS::SQS::Queue" } } } }
}"#,
        },
    }
}

fn explain_backup_enabled() -> Explanation {
    Explanation {
        title: "Automated Backups Enabled",
        check_id: ids::CHECK_ATLAS_BACKUP_ENABLED,
        code: ids::CODE_BACKUP_DISABLED,
        severity: Severity::Warning,
        description: "\
When `require_backup_enabled` is set, every Atlas cluster must declare
`backupEnabled: true`.

A missing flag, `false`, or any non-boolean value (such as the string \"true\")
is reported. The finding is a warning: it is advisory unless `fail_on` is set to
`warning`.",
        remediation: "\
Set `backupEnabled` to the boolean `true` on the cluster properties. If a
cluster is deliberately ephemeral, turn the requirement off for that stage.",
        config: "[guard_rails]\nrequire_backup_enabled = true",
        examples: ExamplePair {
            before: r#"{
  "clusterType": "REPLICASET",
  "backupEnabled": false
}"#,
            after: r#"{
  "clusterType": "REPLICASET",
  "backupEnabled": true
}"#,
        },
    }
}

fn explain_instance_sizes() -> Explanation {
    Explanation {
        title: "Approved Instance Sizes",
        check_id: ids::CHECK_ATLAS_INSTANCE_SIZES,
        code: ids::CODE_UNAPPROVED_INSTANCE_SIZE,
        severity: Severity::Error,
        description: "\
Collects every `instanceSize` declared under a cluster's replication specs
(electable, read-only and analytics specs of every region config) and flags
sizes missing from `approved_instance_sizes`.

One error is emitted per cluster. The offending sizes are listed once each, in
sorted order, followed by the approved list. An empty approved list disables
the check.

A size bound to a CloudFormation parameter (`{\"Ref\": ...}`) is reported by its
JSON text: its deployed value cannot be proven to be on the list.",
        remediation: "\
Pick an approved tier for every node type, or extend the approved list.
Replace parameter references with literal sizes.",
        config: "[guard_rails]\napproved_instance_sizes = [\"M10\", \"M20\", \"M30\"]",
        examples: ExamplePair {
            before: r#"{
  "replicationSpecs": [{
    "advancedRegionConfigs": [{
      "electableSpecs": { "instanceSize": "M10" },
      "analyticsSpecs": { "instanceSize": "M60" }
    }]
  }]
}"#,
            after: r#"{
  "replicationSpecs": [{
    "advancedRegionConfigs": [{
      "electableSpecs": { "instanceSize": "M10" },
      "analyticsSpecs": { "instanceSize": "M20" }
    }]
  }]
}"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_cluster_limit_exceeded() -> Explanation {
    let mut exp = explain_cluster_count();
    exp.title = "Cluster Limit Exceeded";
    exp
}

fn explain_backup_disabled() -> Explanation {
    let mut exp = explain_backup_enabled();
    exp.title = "Backups Disabled";
    exp
}

fn explain_unapproved_instance_size() -> Explanation {
    let mut exp = explain_instance_sizes();
    exp.title = "Unapproved Instance Size";
    exp
}
