use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `atlasguard.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and falls back to the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AtlasguardConfigV1 {
    /// Optional schema string for tooling (`atlasguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `default`, `strict` or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Which severity fails the run: `error`, `warning` or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    #[serde(default)]
    pub guard_rails: GuardRailsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuardRailsConfig {
    /// Maximum number of Atlas clusters in one stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cluster_count: Option<u32>,

    /// Approved instance sizes. An empty list disables the size check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_instance_sizes: Option<Vec<String>>,

    /// Require `backupEnabled: true` on every cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_backup_enabled: Option<bool>,
}
