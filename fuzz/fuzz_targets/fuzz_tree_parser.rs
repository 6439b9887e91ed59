//! Fuzz target for `tree.json` parsing and evaluation.
//!
//! Goal: parsing and evaluating an arbitrary tree should **never panic**.
//! Parse errors are fine; panics are not.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_tree_parser
//! ```

#![no_main]

use atlasguard_domain::policy::{EffectiveConfig, FailOn, GuardRailConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tree) = atlasguard_tree::parse_tree_json(text) else {
        return;
    };

    let cfg = EffectiveConfig {
        profile: "fuzz".to_string(),
        fail_on: FailOn::Error,
        max_findings: 16,
        guard_rails: GuardRailConfig {
            max_cluster_count: 1,
            ..GuardRailConfig::default()
        },
    };
    let report = atlasguard_domain::evaluate(&tree, &cfg);

    assert!(report.data.clusters_seen <= report.data.nodes_visited);
    assert!(report.data.findings_emitted <= report.data.findings_total);
    assert!(report.findings.len() <= cfg.max_findings);
});
