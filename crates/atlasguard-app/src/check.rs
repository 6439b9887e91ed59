//! The `check` use case: load the construct tree, evaluate guard rails and produce a report.

use anyhow::Context;
use atlasguard_settings::{AtlasguardConfigV1, Overrides, ResolvedConfig};
use atlasguard_types::{
    AtlasguardReport, ReportEnvelope, ReportVerdict, RunMeta, SCHEMA_REPORT_V1, Verdict,
    VerdictCounts,
};
use camino::Utf8Path;
use time::OffsetDateTime;
use tracing::debug;

use crate::report::tool_meta;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Path to the synthesized `tree.json`.
    pub tree_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: AtlasguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, load the tree, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        AtlasguardConfigV1::default()
    } else {
        atlasguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        atlasguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;
    debug!(
        profile = %resolved.effective.profile,
        fail_on = resolved.effective.fail_on.as_str(),
        "resolved config"
    );

    let tree = atlasguard_tree::load_tree(input.tree_path)
        .with_context(|| format!("load construct tree {}", input.tree_path))?;

    let atlasguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts,
    } = atlasguard_domain::evaluate(&tree, &resolved.effective);

    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;

    let mut reasons = Vec::new();
    if counts.error > 0 {
        reasons.push("error_findings".to_string());
    }
    if counts.warning > 0 {
        reasons.push("warning_findings".to_string());
    }
    if data.truncated_reason.is_some() {
        reasons.push("truncated".to_string());
    }

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at,
            ended_at: Some(ended_at),
            duration_ms: Some(duration_ms),
        },
        verdict: ReportVerdict {
            status: verdict,
            counts: VerdictCounts {
                warn: counts.warning,
                error: counts.error,
            },
            reasons,
        },
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
