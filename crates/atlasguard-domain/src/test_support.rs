use crate::model::{
    ClusterProps, ConstructNode, ConstructTree, NodeKind, RegionConfig, ReplicationSpec, Specs,
};
use crate::policy::{EffectiveConfig, FailOn, GuardRailConfig};
use atlasguard_types::NodePath;

pub fn guard_rails(max: u32, approved: &[&str], require_backup: bool) -> GuardRailConfig {
    GuardRailConfig {
        max_cluster_count: max,
        approved_instance_sizes: approved.iter().map(|s| s.to_string()).collect(),
        require_backup_enabled: require_backup,
    }
}

pub fn config(guard_rails: GuardRailConfig, fail_on: FailOn) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on,
        max_findings: 200,
        guard_rails,
    }
}

pub fn node(path: &str) -> ConstructNode {
    ConstructNode {
        path: NodePath::new(path),
        kind: NodeKind::Construct,
        children: Vec::new(),
    }
}

pub fn resource(path: &str, resource_type: &str) -> ConstructNode {
    ConstructNode {
        path: NodePath::new(path),
        kind: NodeKind::Resource {
            resource_type: resource_type.to_string(),
        },
        children: Vec::new(),
    }
}

pub fn cluster_node(path: &str, props: ClusterProps) -> ConstructNode {
    ConstructNode {
        path: NodePath::new(path),
        kind: NodeKind::AtlasCluster(props),
        children: Vec::new(),
    }
}

/// A cluster without replication specs.
pub fn cluster(path: &str, backup_enabled: Option<bool>) -> ConstructNode {
    cluster_node(
        path,
        ClusterProps {
            name: None,
            backup_enabled,
            replication_specs: None,
        },
    )
}

/// A cluster with one replication spec holding one region per size (electable specs).
pub fn cluster_with_sizes(path: &str, backup_enabled: Option<bool>, sizes: &[&str]) -> ConstructNode {
    let regions = sizes
        .iter()
        .map(|size| region(Some(*size), None, None))
        .collect();
    cluster_node(
        path,
        ClusterProps {
            name: None,
            backup_enabled,
            replication_specs: Some(vec![replication_spec(regions)]),
        },
    )
}

pub fn region(
    electable: Option<&str>,
    read_only: Option<&str>,
    analytics: Option<&str>,
) -> RegionConfig {
    let specs = |size: Option<&str>| {
        size.map(|s| Specs {
            instance_size: Some(s.to_string()),
        })
    };
    RegionConfig {
        electable_specs: specs(electable),
        read_only_specs: specs(read_only),
        analytics_specs: specs(analytics),
    }
}

pub fn replication_spec(regions: Vec<RegionConfig>) -> ReplicationSpec {
    ReplicationSpec {
        advanced_region_configs: Some(regions),
    }
}

pub fn with_children(mut parent: ConstructNode, children: Vec<ConstructNode>) -> ConstructNode {
    parent.children = children;
    parent
}

/// A tree whose root is an unnamed app construct holding `children`.
pub fn tree(children: Vec<ConstructNode>) -> ConstructTree {
    ConstructTree {
        root: with_children(node(""), children),
    }
}
