use anyhow::Context;
use atlasguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use atlasguard_types::{
    AtlasguardData, AtlasguardReport, Finding, ReportEnvelope, ReportVerdict, RunMeta,
    SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, VerdictCounts, ids,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "atlasguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<AtlasguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse atlasguard report")
}

pub fn serialize_report(report: &AtlasguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &AtlasguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict.status {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            clusters_seen: report.data.clusters_seen,
            errors: report.verdict.counts.error,
            warnings: report.verdict.counts.warn,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        node_path: f.node_path.as_ref().map(|p| p.as_str().to_string()),
        help: f.help.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding.
///
/// Written in place of a real report when the check could not run, so CI always has a
/// report to render.
pub fn runtime_error_report(message: &str) -> AtlasguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at: now,
            ended_at: Some(now),
            duration_ms: Some(0),
        },
        verdict: ReportVerdict {
            status: Verdict::Fail,
            counts: VerdictCounts { warn: 0, error: 1 },
            reasons: vec!["tool_error".to_string()],
        },
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            node_path: None,
            help: Some("Fix the tool error and re-run atlasguard.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: AtlasguardData {
            profile: "unknown".to_string(),
            fail_on: "error".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..AtlasguardData::default()
        },
    }
}
