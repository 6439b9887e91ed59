use super::ClusterVisit;
use crate::fingerprint::fingerprint_for_node;
use crate::policy::GuardRailConfig;
use crate::sink::DiagnosticSink;
use atlasguard_types::{Finding, Severity, ids};
use serde_json::json;

pub fn run(cluster: &ClusterVisit<'_>, cfg: &GuardRailConfig, out: &mut dyn DiagnosticSink) {
    if !cfg.require_backup_enabled || cluster.props.backup_enabled == Some(true) {
        return;
    }

    out.emit(Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_ATLAS_BACKUP_ENABLED.to_string(),
        code: ids::CODE_BACKUP_DISABLED.to_string(),
        message: "Guard rail warning: Automated backups should be enabled for Atlas clusters."
            .to_string(),
        node_path: Some(cluster.path.clone()),
        help: Some("Set backupEnabled: true on the cluster properties.".to_string()),
        fingerprint: Some(fingerprint_for_node(
            ids::CHECK_ATLAS_BACKUP_ENABLED,
            ids::CODE_BACKUP_DISABLED,
            cluster.path.as_str(),
        )),
        data: json!({
            "cluster": cluster.props.name,
            "backup_enabled": cluster.props.backup_enabled,
        }),
    });
}
