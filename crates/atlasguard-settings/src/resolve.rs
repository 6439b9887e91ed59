use crate::{model::AtlasguardConfigV1, presets};
use anyhow::Context;
use atlasguard_domain::policy::{EffectiveConfig, FailOn};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
    pub max_cluster_count: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: AtlasguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let Some(mut effective) = presets::preset(&profile) else {
        anyhow::bail!(
            "unknown profile: {profile} (expected one of {})",
            presets::PROFILES.join("|")
        );
    };

    // fail_on
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // guard rails
    let rails = &mut effective.guard_rails;
    if let Some(max) = overrides
        .max_cluster_count
        .or(cfg.guard_rails.max_cluster_count)
    {
        rails.max_cluster_count = max;
    }
    if let Some(sizes) = cfg.guard_rails.approved_instance_sizes {
        rails.approved_instance_sizes =
            validate_instance_sizes(sizes).context("invalid guard_rails.approved_instance_sizes")?;
    }
    if let Some(require) = cfg.guard_rails.require_backup_enabled {
        rails.require_backup_enabled = require;
    }

    Ok(ResolvedConfig { effective })
}

fn validate_instance_sizes(sizes: Vec<String>) -> anyhow::Result<Vec<String>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(sizes.len());
    for size in sizes {
        let trimmed = size.trim();
        if trimmed.is_empty() {
            anyhow::bail!("instance size entries must not be empty");
        }
        if !seen.insert(trimmed.to_string()) {
            anyhow::bail!("duplicate instance size: {trimmed}");
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        "never" => Ok(FailOn::Never),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning|never)"),
    }
}
