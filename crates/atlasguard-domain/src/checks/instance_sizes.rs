use super::ClusterVisit;
use super::sizes::instance_sizes;
use crate::fingerprint::fingerprint_for_node;
use crate::policy::GuardRailConfig;
use crate::sink::DiagnosticSink;
use atlasguard_types::{Finding, Severity, ids};
use serde_json::json;
use std::collections::BTreeSet;

pub fn run(cluster: &ClusterVisit<'_>, cfg: &GuardRailConfig, out: &mut dyn DiagnosticSink) {
    if !cfg.restricts_instance_sizes() {
        return;
    }

    // BTreeSet: deduplicated and sorted, so messages are reproducible.
    let unapproved: BTreeSet<&str> =
        instance_sizes(cluster.props.replication_specs.as_deref())
            .into_iter()
            .filter(|size| !cfg.is_approved(size))
            .collect();
    if unapproved.is_empty() {
        return;
    }

    let listed = unapproved.iter().copied().collect::<Vec<_>>().join(", ");
    let approved = cfg.approved_instance_sizes.join(", ");
    out.emit(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_ATLAS_INSTANCE_SIZES.to_string(),
        code: ids::CODE_UNAPPROVED_INSTANCE_SIZE.to_string(),
        message: format!(
            "Guard rail violation: instance sizes [{listed}] are not approved. \
             Approved sizes: {approved}."
        ),
        node_path: Some(cluster.path.clone()),
        help: Some(format!("Use one of the approved sizes: {approved}.")),
        fingerprint: Some(fingerprint_for_node(
            ids::CHECK_ATLAS_INSTANCE_SIZES,
            ids::CODE_UNAPPROVED_INSTANCE_SIZE,
            cluster.path.as_str(),
        )),
        data: json!({
            "cluster": cluster.props.name,
            "unapproved": unapproved,
            "approved": cfg.approved_instance_sizes,
        }),
    });
}
