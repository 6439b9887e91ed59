use crate::aspect::GuardRailAspect;
use crate::model::{ConstructNode, ConstructTree};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use atlasguard_types::{AtlasguardData, Finding, Severity, Verdict};
use tracing::{info, warn};

/// Depth-first pre-order walk: a node is visited before its children, children in
/// declaration order.
pub fn walk<'t>(root: &'t ConstructNode, mut visit: impl FnMut(&'t ConstructNode)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        stack.extend(node.children.iter().rev());
    }
}

pub fn evaluate(tree: &ConstructTree, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();
    let mut aspect = GuardRailAspect::new(&cfg.guard_rails);
    let mut nodes_visited: u32 = 0;

    walk(&tree.root, |node| {
        nodes_visited += 1;
        aspect.visit(node, &mut findings);
    });

    let clusters_seen = aspect.match_count();
    info!(
        nodes_visited,
        clusters_seen,
        findings = findings.len(),
        "guard rails evaluated"
    );

    // Verdict and counts cover every finding, so truncation can never hide an error.
    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);
    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        warn!(total, max_findings = cfg.max_findings, "truncating findings");
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let data = AtlasguardData {
        profile: cfg.profile.clone(),
        fail_on: cfg.fail_on.as_str().to_string(),
        nodes_visited,
        clusters_seen,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);

    match fail_on {
        FailOn::Error if has_error => Verdict::Fail,
        FailOn::Warning if has_error || has_warn => Verdict::Fail,
        _ if has_error || has_warn => Verdict::Warn,
        _ => Verdict::Pass,
    }
}
