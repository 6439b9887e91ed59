/// When a report should be considered failing.
///
/// The engine only classifies findings; this decides what the host does with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    /// Errors fail, warnings only warn.
    Error,
    /// Any finding fails.
    Warning,
    /// Report only; nothing fails.
    Never,
}

impl FailOn {
    pub fn as_str(self) -> &'static str {
        match self {
            FailOn::Error => "error",
            FailOn::Warning => "warning",
            FailOn::Never => "never",
        }
    }
}

/// Guard rails enforced on every Atlas cluster of a stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardRailConfig {
    /// Maximum number of clusters allowed in a single deployment stage.
    pub max_cluster_count: u32,
    /// Approved instance sizes, in the order they are reported. Empty means unrestricted.
    pub approved_instance_sizes: Vec<String>,
    /// Require automated backups to be enabled for every cluster.
    pub require_backup_enabled: bool,
}

impl Default for GuardRailConfig {
    fn default() -> Self {
        Self {
            max_cluster_count: 3,
            approved_instance_sizes: vec!["M10".to_string(), "M20".to_string(), "M30".to_string()],
            require_backup_enabled: true,
        }
    }
}

impl GuardRailConfig {
    pub fn restricts_instance_sizes(&self) -> bool {
        !self.approved_instance_sizes.is_empty()
    }

    pub fn is_approved(&self, size: &str) -> bool {
        self.approved_instance_sizes.iter().any(|s| s == size)
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub guard_rails: GuardRailConfig,
}
