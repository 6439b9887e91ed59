//! Fuzz target for config parsing and override resolution.
//!
//! Goal: resolution should **never panic**, and whatever it accepts must satisfy the
//! approved-size invariants (trimmed, non-empty, unique).
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_resolution
//! ```

#![no_main]

use arbitrary::Arbitrary;
use atlasguard_settings::Overrides;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

#[derive(Arbitrary, Debug)]
struct ConfigInput {
    toml: String,
    profile: Option<String>,
    fail_on: Option<String>,
    max_findings: Option<u32>,
    max_cluster_count: Option<u32>,
}

fuzz_target!(|input: ConfigInput| {
    let Ok(cfg) = atlasguard_settings::parse_config_toml(&input.toml) else {
        return;
    };
    let overrides = Overrides {
        profile: input.profile,
        fail_on: input.fail_on,
        max_findings: input.max_findings,
        max_cluster_count: input.max_cluster_count,
    };
    let Ok(resolved) = atlasguard_settings::resolve_config(cfg, overrides) else {
        return;
    };

    let sizes = &resolved.effective.guard_rails.approved_instance_sizes;
    let unique: BTreeSet<_> = sizes.iter().collect();
    assert_eq!(unique.len(), sizes.len());
    assert!(sizes.iter().all(|s| !s.is_empty() && s.trim() == s));
});
