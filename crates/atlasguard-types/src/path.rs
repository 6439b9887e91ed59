use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a construct in the tree, e.g. `MongoDbAtlasStage/MongoDbAtlasStack/Cluster`.
///
/// Segments are joined with `/`. Leading and trailing separators are dropped, so the root
/// construct of an app has the empty path.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodePath(String);

impl NodePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim_matches('/').to_string())
    }

    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, id: &str) -> NodePath {
        if self.is_root() {
            NodePath::new(id)
        } else {
            NodePath::new(format!("{}/{}", self.0, id))
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePath {
    fn from(value: &str) -> Self {
        NodePath::new(value)
    }
}
