use atlasguard_domain::policy::{EffectiveConfig, FailOn, GuardRailConfig};

/// Known profile names.
pub const PROFILES: &[&str] = &["default", "strict", "advisory"];

/// Preset profiles are opinionated defaults.
///
/// All presets share the stock guard rails; they differ in what blocks a deployment.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    let fail_on = match profile {
        "default" => FailOn::Error,
        "strict" => FailOn::Warning,
        "advisory" => FailOn::Never,
        _ => return None,
    };
    Some(EffectiveConfig {
        profile: profile.to_string(),
        fail_on,
        max_findings: 200,
        guard_rails: GuardRailConfig::default(),
    })
}
