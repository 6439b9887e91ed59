//! Tree adapters: read the construct tree a CDK synth writes to `cdk.out/tree.json`.
//!
//! This crate is allowed to do filesystem IO. It never evaluates policy; it only turns the
//! serialized tree into [`ConstructTree`].

#![forbid(unsafe_code)]

mod parse;

use atlasguard_domain::model::ConstructTree;
use atlasguard_types::NodePath;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::debug;

pub use parse::parse_tree_json;

/// Default location of the tree inside a cloud assembly directory.
pub const DEFAULT_TREE_FILE: &str = "cdk.out/tree.json";

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("read tree file {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tree JSON")]
    Json(#[from] serde_json::Error),

    #[error("tree file has no `tree` root node")]
    MissingTree,

    #[error("malformed construct '{path}'")]
    MalformedNode {
        path: NodePath,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed properties for Atlas cluster '{path}'")]
    MalformedProperties {
        path: NodePath,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a `tree.json` file.
pub fn load_tree(path: &Utf8Path) -> Result<ConstructTree, TreeError> {
    let text = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(%path, bytes = text.len(), "read construct tree");
    parse_tree_json(&text)
}
