//! Repository maintenance for atlasguard: generated schemas, fixture reports, explain registry.
//!
//! Run as `cargo xtask <task>`.

use anyhow::{Context, bail};
use atlasguard_types::explain::{all_check_ids, all_codes, guard_rails, lookup_explanation};
use atlasguard_types::{AtlasguardReport, Severity, Verdict};
use schemars::{Schema, schema_for};
use std::fs;
use std::path::{Path, PathBuf};

/// Generated schema files under `schemas/`, named after their schema id.
const SCHEMA_FILES: &[(&str, fn() -> Schema)] = &[
    ("atlasguard.report.v1", report_schema),
    ("atlasguard.config.v1", config_schema),
];

fn report_schema() -> Schema {
    schema_for!(atlasguard_types::AtlasguardReport)
}

fn config_schema() -> Schema {
    schema_for!(atlasguard_settings::AtlasguardConfigV1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Help,
    EmitSchemas,
    ValidateSchemas,
    PrintSchemaIds,
    Conform,
    ExplainCoverage,
}

impl Task {
    const ALL: &'static [(&'static str, Task, &'static str)] = &[
        ("help", Task::Help, "Show this message"),
        ("emit-schemas", Task::EmitSchemas, "Write schemas/*.json from the Rust types"),
        (
            "validate-schemas",
            Task::ValidateSchemas,
            "Fail if schemas/ is missing or stale (CI)",
        ),
        ("print-schema-ids", Task::PrintSchemaIds, "Print the schema ids"),
        (
            "conform",
            Task::Conform,
            "Check tests/fixtures/*/expected.report.json against the report schema",
        ),
        (
            "explain-coverage",
            Task::ExplainCoverage,
            "Check every guard rail has a complete explanation",
        ),
    ];

    fn parse(name: &str) -> Option<Task> {
        match name {
            "--help" | "-h" => Some(Task::Help),
            _ => Self::ALL
                .iter()
                .find(|(n, _, _)| *n == name)
                .map(|(_, task, _)| *task),
        }
    }
}

fn project_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest)
}

fn schema_text(generate: fn() -> Schema) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(&generate()).context("serialize schema")?;
    text.push('\n');
    Ok(text)
}

/// Write the schemas, or with `check_only` report which ones differ from the generated text.
fn sync_schemas(check_only: bool) -> anyhow::Result<()> {
    let dir = project_root().join("schemas");
    if !check_only {
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    }

    let mut stale = Vec::new();
    for (id, generate) in SCHEMA_FILES {
        let path = dir.join(format!("{id}.json"));
        let expected = schema_text(*generate)?;
        if check_only {
            match fs::read_to_string(&path) {
                Ok(actual) if actual == expected => {}
                Ok(_) => stale.push(format!("{id} (out of date)")),
                Err(_) => stale.push(format!("{id} (missing)")),
            }
        } else {
            fs::write(&path, expected).with_context(|| format!("write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
    }

    if stale.is_empty() {
        if check_only {
            println!("schemas are up to date");
        }
        return Ok(());
    }
    for entry in &stale {
        eprintln!("  - {entry}");
    }
    bail!("schemas/ is stale; run `cargo xtask emit-schemas`")
}

fn is_token(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Problems in one expected report beyond what the JSON schema can express.
fn report_problems(report: &AtlasguardReport) -> Vec<String> {
    let mut problems = Vec::new();

    for (i, finding) in report.findings.iter().enumerate() {
        if !guard_rails().contains(&(finding.check_id.as_str(), finding.code.as_str())) {
            problems.push(format!(
                "finding[{i}]: {} / {} is not a known guard rail",
                finding.check_id, finding.code
            ));
        }
        match &finding.node_path {
            Some(path) => {
                let p = path.as_str();
                if p.is_empty() || p.starts_with('/') || p.ends_with('/') || p.contains("//") {
                    problems.push(format!("finding[{i}]: node_path '{p}' is not a construct path"));
                }
            }
            None => problems.push(format!("finding[{i}]: guard rail finding without node_path")),
        }
        if finding.fingerprint.as_deref().is_none_or(|f| f.len() != 64) {
            problems.push(format!("finding[{i}]: fingerprint is not a sha256 hex digest"));
        }
    }

    let errors = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count() as u32;
    let warnings = report.findings.len() as u32 - errors;
    let counts = &report.verdict.counts;
    if report.data.truncated_reason.is_none() && (counts.error, counts.warn) != (errors, warnings) {
        problems.push(format!(
            "verdict counts {}/{} disagree with findings {errors}/{warnings}",
            counts.error, counts.warn
        ));
    }
    if report.verdict.status == Verdict::Pass && !report.findings.is_empty() {
        problems.push("pass verdict with findings".to_string());
    }
    for reason in &report.verdict.reasons {
        if !is_token(reason) {
            problems.push(format!("verdict reason '{reason}' is not a token"));
        }
    }

    problems
}

/// Expected reports carry `__TIMESTAMP__` placeholders; swap in a real instant before typed parsing.
fn with_concrete_run_times(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(run) = value.get_mut("run").and_then(serde_json::Value::as_object_mut) {
        for key in ["started_at", "ended_at"] {
            if run.get(key).is_some_and(|v| v == "__TIMESTAMP__") {
                run.insert(key.to_string(), "2026-01-01T00:00:00Z".into());
            }
        }
    }
    value
}

fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(report_schema()).context("encode report schema")?;
    let validator = jsonschema::draft202012::new(&schema)
        .map_err(|e| anyhow::anyhow!("report schema does not compile: {e}"))?;

    let dir = project_root().join("tests").join("fixtures");
    let mut fixtures = fs::read_dir(&dir)
        .with_context(|| format!("read {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?;
    fixtures.sort_by_key(|e| e.file_name());

    let mut checked = 0;
    let mut problems = Vec::new();
    for fixture in fixtures {
        let path = fixture.path().join("expected.report.json");
        if !path.exists() {
            continue;
        }
        let name = fixture.file_name().to_string_lossy().into_owned();
        let text = fs::read_to_string(&path).with_context(|| format!("read {name}"))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).with_context(|| format!("{name}: not JSON"))?;

        problems.extend(
            validator
                .iter_errors(&value)
                .map(|err| format!("{name}: schema: {err}")),
        );
        match serde_json::from_value::<AtlasguardReport>(with_concrete_run_times(value)) {
            Ok(report) => problems.extend(
                report_problems(&report)
                    .into_iter()
                    .map(|p| format!("{name}: {p}")),
            ),
            Err(err) => problems.push(format!("{name}: not an atlasguard report: {err}")),
        }
        checked += 1;
    }

    if checked == 0 {
        bail!("no expected reports under {}", dir.display());
    }
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("  - {problem}");
        }
        bail!("{} problem(s) in fixture reports", problems.len());
    }
    println!("{checked} fixture reports conform");
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    let mut problems = Vec::new();

    for id in all_check_ids().iter().chain(all_codes()) {
        let Some(exp) = lookup_explanation(id) else {
            problems.push(format!("'{id}' has no explanation"));
            continue;
        };
        for (field, text) in [
            ("title", exp.title),
            ("description", exp.description),
            ("remediation", exp.remediation),
            ("config", exp.config),
        ] {
            if text.trim().is_empty() {
                problems.push(format!("'{id}' has an empty {field}"));
            }
        }
        if *id != exp.check_id && *id != exp.code {
            problems.push(format!("'{id}' resolves to {} / {}", exp.check_id, exp.code));
        }
        for snippet in [exp.examples.before, exp.examples.after] {
            if serde_json::from_str::<serde_json::Value>(snippet).is_err() {
                problems.push(format!("'{id}' has an example that is not JSON"));
            }
        }
    }

    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("  - {problem}");
        }
        bail!("{} explain registry problem(s)", problems.len());
    }
    println!("{} check IDs have explanations", all_check_ids().len());
    println!("{} codes have explanations", all_codes().len());
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    for (name, _, about) in Task::ALL {
        eprintln!("  {name:<18}{about}");
    }
}

fn main() -> anyhow::Result<()> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());
    let Some(task) = Task::parse(&name) else {
        print_help();
        bail!("unknown xtask command: {name}");
    };

    match task {
        Task::Help => {
            print_help();
            Ok(())
        }
        Task::EmitSchemas => sync_schemas(false),
        Task::ValidateSchemas => sync_schemas(true),
        Task::PrintSchemaIds => {
            for (id, _) in SCHEMA_FILES {
                println!("{id}");
            }
            Ok(())
        }
        Task::Conform => conform(),
        Task::ExplainCoverage => explain_coverage(),
    }
}
