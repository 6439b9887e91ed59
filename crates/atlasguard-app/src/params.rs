//! The `params` use case: turn a parameter file into `cdk deploy` arguments.
//!
//! The file is a flat JSON object. Keys starting with `_` are metadata (for example
//! `_instructions`) and are skipped.

use serde_json::{Map, Value};
use thiserror::Error;

/// Parameter file read when none is given on the command line.
pub const DEFAULT_PARAMS_FILE: &str = "config/atlas-parameters.json";

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("the parameter file must contain valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("the parameter file must define a JSON object of key/value pairs")]
    NotAnObject,

    #[error("parameter \"{0}\" is undefined")]
    UndefinedParameter(String),

    #[error("parameter \"{0}\" has an unsupported value (objects cannot be passed as parameters)")]
    UnsupportedValue(String),

    #[error("no deployable parameters found in the provided file")]
    Empty,
}

/// Convert parameter file contents into `--parameters key=value` argument pairs, in file order.
pub fn parameter_args(json_text: &str) -> Result<Vec<String>, ParamsError> {
    let value: Value = serde_json::from_str(json_text)?;
    let Value::Object(entries) = value else {
        return Err(ParamsError::NotAnObject);
    };

    let args = collect_args(entries)?;
    if args.is_empty() {
        return Err(ParamsError::Empty);
    }
    Ok(args)
}

fn collect_args(entries: Map<String, Value>) -> Result<Vec<String>, ParamsError> {
    let mut args = Vec::new();
    for (key, raw) in entries {
        if key.starts_with('_') {
            continue;
        }
        let value = match &raw {
            Value::Null => return Err(ParamsError::UndefinedParameter(key)),
            Value::Array(items) => items
                .iter()
                .map(|item| list_item(&key, item))
                .collect::<Result<Vec<_>, _>>()?
                .join(","),
            Value::Object(_) => return Err(ParamsError::UnsupportedValue(key)),
            scalar => scalar_text(scalar),
        };
        args.push("--parameters".to_string());
        args.push(format!("{key}={value}"));
    }
    Ok(args)
}

fn list_item(key: &str, item: &Value) -> Result<String, ParamsError> {
    match item {
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(ParamsError::UnsupportedValue(key.to_string())),
        scalar => Ok(scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_values_in_file_order() {
        let args = parameter_args(
            r#"{
  "_instructions": "copy me",
  "OrgId": "5f0a",
  "ProjectName": "orders",
  "ClusterCount": 2,
  "BackupEnabled": true,
  "Regions": ["US_EAST_1", "EU_WEST_1"],
  "Ratio": 0.5
}"#,
        )
        .unwrap();

        assert_eq!(
            args,
            vec![
                "--parameters",
                "OrgId=5f0a",
                "--parameters",
                "ProjectName=orders",
                "--parameters",
                "ClusterCount=2",
                "--parameters",
                "BackupEnabled=true",
                "--parameters",
                "Regions=US_EAST_1,EU_WEST_1",
                "--parameters",
                "Ratio=0.5",
            ]
        );
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(parameter_args("[1, 2]"), Err(ParamsError::NotAnObject)));
        assert!(matches!(parameter_args("null"), Err(ParamsError::NotAnObject)));
        assert!(matches!(parameter_args("{ nope"), Err(ParamsError::Json(_))));
    }

    #[test]
    fn null_value_is_undefined() {
        let err = parameter_args(r#"{ "OrgId": null }"#).unwrap_err();
        assert!(matches!(&err, ParamsError::UndefinedParameter(k) if k == "OrgId"));
        assert_eq!(err.to_string(), "parameter \"OrgId\" is undefined");
    }

    #[test]
    fn nested_objects_are_unsupported() {
        let err = parameter_args(r#"{ "Tags": { "team": "data" } }"#).unwrap_err();
        assert!(matches!(err, ParamsError::UnsupportedValue(k) if k == "Tags"));

        let err = parameter_args(r#"{ "Tags": [{ "team": "data" }] }"#).unwrap_err();
        assert!(matches!(err, ParamsError::UnsupportedValue(k) if k == "Tags"));
    }

    #[test]
    fn metadata_only_file_is_empty() {
        let err = parameter_args(r#"{ "_instructions": "fill in values" }"#).unwrap_err();
        assert!(matches!(err, ParamsError::Empty));
        assert!(matches!(parameter_args("{}"), Err(ParamsError::Empty)));
    }

    #[test]
    fn list_nulls_become_empty_entries() {
        let args = parameter_args(r#"{ "Zones": ["a", null, 3, false] }"#).unwrap();
        assert_eq!(args[1], "Zones=a,,3,false");
    }
}
