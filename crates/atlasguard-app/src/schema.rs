//! JSON Schemas for the config file and the report envelope.

use atlasguard_settings::AtlasguardConfigV1;
use atlasguard_types::AtlasguardReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    Config,
    Report,
}

pub fn schema_json(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Config => schemars::schema_for!(AtlasguardConfigV1),
        SchemaKind::Report => schemars::schema_for!(AtlasguardReport),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
