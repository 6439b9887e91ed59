use atlasguard_types::NodePath;
use serde::{Deserialize, Deserializer};

/// A fully materialized construct tree (app, stages, stacks, resources).
#[derive(Clone, Debug, Default)]
pub struct ConstructTree {
    pub root: ConstructNode,
}

#[derive(Clone, Debug, Default)]
pub struct ConstructNode {
    pub path: NodePath,
    pub kind: NodeKind,
    /// Child constructs in declaration order.
    pub children: Vec<ConstructNode>,
}

/// What a construct is. Only `AtlasCluster` carries properties the guard rails read.
#[derive(Clone, Debug, Default)]
pub enum NodeKind {
    /// `MongoDB::Atlas::Cluster` resource.
    AtlasCluster(ClusterProps),
    /// Any other CloudFormation resource.
    Resource { resource_type: String },
    /// Scopes without a CloudFormation type (app, stage, stack, L2/L3 wrappers).
    #[default]
    Construct,
}

/// Properties of an Atlas cluster resource.
///
/// Every level is optional: absence is normal and simply means fewer values to check.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProps {
    /// A literal name, or the JSON text of an unresolved token such as `{"Ref":"..."}`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,

    /// `Some(true)` only for a JSON `true`. Any other value reads as `None`.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub backup_enabled: Option<bool>,

    #[serde(default)]
    pub replication_specs: Option<Vec<ReplicationSpec>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(default)]
    pub advanced_region_configs: Option<Vec<RegionConfig>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConfig {
    #[serde(default)]
    pub electable_specs: Option<Specs>,
    #[serde(default)]
    pub read_only_specs: Option<Specs>,
    #[serde(default)]
    pub analytics_specs: Option<Specs>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    /// Unresolved tokens keep their JSON text so they can never match an approved size.
    #[serde(default, deserialize_with = "lenient_text")]
    pub instance_size: Option<String>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl ConstructNode {
    pub fn is_atlas_cluster(&self) -> bool {
        matches!(self.kind, NodeKind::AtlasCluster(_))
    }
}

impl RegionConfig {
    /// Sub-specifications in inspection order: electable, read-only, analytics.
    pub fn specs(&self) -> [Option<&Specs>; 3] {
        [
            self.electable_specs.as_ref(),
            self.read_only_specs.as_ref(),
            self.analytics_specs.as_ref(),
        ]
    }
}
