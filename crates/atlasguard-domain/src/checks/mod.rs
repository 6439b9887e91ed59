use crate::model::ClusterProps;
use crate::policy::GuardRailConfig;
use crate::sink::DiagnosticSink;
use atlasguard_types::NodePath;

mod backup_enabled;
mod cluster_count;
mod instance_sizes;
pub mod sizes;


/// A cluster as seen by the checks: its location, its properties and its position among the
/// clusters visited so far (1-based).
#[derive(Clone, Copy, Debug)]
pub struct ClusterVisit<'a> {
    pub path: &'a NodePath,
    pub props: &'a ClusterProps,
    pub ordinal: u32,
}

/// Run every guard rail against one cluster. Order is fixed: count, backups, instance sizes.
pub fn run_all(cluster: &ClusterVisit<'_>, cfg: &GuardRailConfig, out: &mut dyn DiagnosticSink) {
    cluster_count::run(cluster, cfg, out);
    backup_enabled::run(cluster, cfg, out);
    instance_sizes::run(cluster, cfg, out);
}
