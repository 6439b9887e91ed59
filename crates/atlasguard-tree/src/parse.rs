use crate::TreeError;
use atlasguard_domain::model::{ClusterProps, ConstructNode, ConstructTree, NodeKind};
use atlasguard_types::{NodePath, ids};
use serde::Deserialize;
use serde_json::{Map, Value};

const ATTR_CFN_TYPE: &str = "aws:cdk:cloudformation:type";
const ATTR_CFN_PROPS: &str = "aws:cdk:cloudformation:props";

#[derive(Debug, Deserialize)]
struct RawTreeFile {
    #[serde(default)]
    tree: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNode {
    #[serde(default)]
    path: Option<String>,
    /// Kept as raw JSON so children parse with their own path in errors.
    #[serde(default)]
    children: Option<Map<String, Value>>,
    #[serde(default)]
    attributes: Option<Map<String, Value>>,
}

/// Parse the contents of a CDK `tree.json`.
///
/// Children keep their document order. Only nodes typed `MongoDB::Atlas::Cluster` have their
/// properties parsed; every other node is reduced to its path and type.
pub fn parse_tree_json(text: &str) -> Result<ConstructTree, TreeError> {
    let file: RawTreeFile = serde_json::from_str(text)?;
    let root = file.tree.ok_or(TreeError::MissingTree)?;
    let root = convert(root, &NodePath::root(), None)?;
    Ok(ConstructTree { root })
}

fn convert(
    value: Value,
    parent: &NodePath,
    key: Option<&str>,
) -> Result<ConstructNode, TreeError> {
    let fallback_path = match key {
        Some(id) => parent.child(id),
        None => parent.clone(),
    };
    let raw: RawNode = serde_json::from_value(value).map_err(|source| TreeError::MalformedNode {
        path: fallback_path.clone(),
        source,
    })?;

    let path = raw.path.as_deref().map(NodePath::new).unwrap_or(fallback_path);

    let kind = node_kind(&path, raw.attributes)?;

    let children = raw
        .children
        .unwrap_or_default()
        .into_iter()
        .map(|(id, child)| convert(child, &path, Some(&id)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ConstructNode {
        path,
        kind,
        children,
    })
}

fn node_kind(path: &NodePath, attributes: Option<Map<String, Value>>) -> Result<NodeKind, TreeError> {
    let mut attributes = attributes.unwrap_or_default();
    let Some(resource_type) = attributes
        .get(ATTR_CFN_TYPE)
        .and_then(Value::as_str)
        .map(str::to_string)
    else {
        return Ok(NodeKind::Construct);
    };

    if resource_type != ids::RESOURCE_TYPE_ATLAS_CLUSTER {
        return Ok(NodeKind::Resource { resource_type });
    }

    let props = match attributes.remove(ATTR_CFN_PROPS) {
        None | Some(Value::Null) => ClusterProps::default(),
        Some(value) => {
            serde_json::from_value(value).map_err(|source| TreeError::MalformedProperties {
                path: path.clone(),
                source,
            })?
        }
    };
    Ok(NodeKind::AtlasCluster(props))
}
