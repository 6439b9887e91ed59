//! The `explain` use case: documentation for a guard rail, by check_id or code.

use atlasguard_types::Severity;
use atlasguard_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier, with every `(check_id, code)` pair that would have matched.
    NotFound {
        identifier: String,
        guard_rails: &'static [(&'static str, &'static str)],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            guard_rails: explain::guard_rails(),
        },
    }
}

/// Terminal rendering: header, prose, the `atlasguard.toml` knob, then `tree.json` fragments.
pub fn format_explanation(exp: &Explanation) -> String {
    let severity = match exp.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    let header = format!("{} [{} / {}, {}]", exp.title, exp.check_id, exp.code, severity);

    let mut out = format!("{header}\n{}\n\n", "=".repeat(header.len()));
    out.push_str(exp.description);
    out.push_str("\n\nHow to fix\n----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");

    fenced(&mut out, "Configured in atlasguard.toml:", "toml", exp.config);
    fenced(
        &mut out,
        "Flagged (tree.json fragment):",
        "json",
        exp.examples.before,
    );
    fenced(&mut out, "Passes (tree.json fragment):", "json", exp.examples.after);

    out
}

fn fenced(out: &mut String, label: &str, lang: &str, body: &str) {
    out.push_str(&format!("{label}\n```{lang}\n{}\n```\n", body.trim_end()));
}

/// Error text for an unknown identifier, listing each guard rail with its code.
pub fn format_not_found(identifier: &str, guard_rails: &[(&str, &str)]) -> String {
    let width = guard_rails
        .iter()
        .map(|(check_id, _)| check_id.len())
        .max()
        .unwrap_or_default();

    let mut out = format!("Unknown check_id or code: {identifier}\n\nKnown guard rails (check_id, code):\n");
    for (check_id, code) in guard_rails {
        out.push_str(&format!("  {check_id:<width$}  {code}\n"));
    }
    out
}
