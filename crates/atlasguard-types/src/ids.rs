//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_ATLAS_CLUSTER_COUNT: &str = "atlas.cluster_count";
pub const CHECK_ATLAS_BACKUP_ENABLED: &str = "atlas.backup_enabled";
pub const CHECK_ATLAS_INSTANCE_SIZES: &str = "atlas.instance_sizes";

// Codes: atlas.cluster_count
pub const CODE_CLUSTER_LIMIT_EXCEEDED: &str = "cluster_limit_exceeded";

// Codes: atlas.backup_enabled
pub const CODE_BACKUP_DISABLED: &str = "backup_disabled";

// Codes: atlas.instance_sizes
pub const CODE_UNAPPROVED_INSTANCE_SIZE: &str = "unapproved_instance_size";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// CloudFormation type of the construct the guard rails apply to.
pub const RESOURCE_TYPE_ATLAS_CLUSTER: &str = "MongoDB::Atlas::Cluster";
