use super::ClusterVisit;
use crate::fingerprint::fingerprint_for_node;
use crate::policy::GuardRailConfig;
use crate::sink::DiagnosticSink;
use atlasguard_types::{Finding, Severity, ids};
use serde_json::json;

pub fn run(cluster: &ClusterVisit<'_>, cfg: &GuardRailConfig, out: &mut dyn DiagnosticSink) {
    let limit = cfg.max_cluster_count;
    if cluster.ordinal <= limit {
        return;
    }

    let already_defined = cluster.ordinal - 1;
    out.emit(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_ATLAS_CLUSTER_COUNT.to_string(),
        code: ids::CODE_CLUSTER_LIMIT_EXCEEDED.to_string(),
        message: format!(
            "Guard rail violation: stage already defines {already_defined} cluster(s); \
             adding '{}' exceeds the limit of {limit}.",
            cluster.path
        ),
        node_path: Some(cluster.path.clone()),
        help: Some(
            "Consolidate clusters, split the stage, or raise guard_rails.max_cluster_count."
                .to_string(),
        ),
        fingerprint: Some(fingerprint_for_node(
            ids::CHECK_ATLAS_CLUSTER_COUNT,
            ids::CODE_CLUSTER_LIMIT_EXCEEDED,
            cluster.path.as_str(),
        )),
        data: json!({
            "clusters_before": already_defined,
            "max_cluster_count": limit,
        }),
    });
}
