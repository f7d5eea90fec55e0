use crate::errors::ToolError;
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

// A malformed catalog yields an empty list; the startup wiring check then
// refuses to run because no handler has a catalog entry.
static TOOL_CATALOG: Lazy<Vec<ToolDef>> = Lazy::new(|| {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tool_catalog.json"));
    serde_json::from_str(raw).unwrap_or_default()
});

static TOOL_MAP: Lazy<HashMap<String, ToolDef>> = Lazy::new(|| {
    TOOL_CATALOG
        .iter()
        .cloned()
        .map(|tool| (tool.name.clone(), tool))
        .collect()
});

static TOOL_VALIDATORS: Lazy<HashMap<String, JSONSchema>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for tool in TOOL_CATALOG.iter() {
        if let Ok(schema) = JSONSchema::compile(&tool.input_schema) {
            map.insert(tool.name.clone(), schema);
        }
    }
    map
});

pub fn tool_catalog() -> &'static Vec<ToolDef> {
    &TOOL_CATALOG
}

pub fn tool_by_name(name: &str) -> Option<&'static ToolDef> {
    TOOL_MAP.get(name)
}

/// Tools advertised through `tools/list`, in catalog order.
pub fn list_tools() -> Vec<ToolDef> {
    TOOL_CATALOG.clone()
}

pub fn validate_tool_args(tool_name: &str, args: &Value) -> Result<(), ToolError> {
    let Some(schema) = TOOL_VALIDATORS.get(tool_name) else {
        return Ok(());
    };
    if let Err(errors) = schema.validate(args) {
        let problems: Vec<String> = errors.take(10).map(describe_error).collect();
        let mut lines = vec![format!("Invalid arguments for {}", tool_name)];
        lines.extend(problems.iter().map(|line| format!("- {}", line)));
        let hint = tool_by_name(tool_name)
            .and_then(|tool| tool.input_schema.get("required"))
            .and_then(Value::as_array)
            .filter(|required| !required.is_empty())
            .map(|required| {
                let names: Vec<String> = required
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                format!("Required fields: {}", names.join(", "))
            });
        let mut err = ToolError::invalid_params(lines.join("\n"))
            .with_details(serde_json::json!({ "errors": problems }));
        if let Some(hint) = hint {
            err = err.with_hint(hint);
        }
        return Err(err);
    }
    Ok(())
}

fn describe_error(err: jsonschema::ValidationError<'_>) -> String {
    let path = err.instance_path.to_string();
    let at = if path.is_empty() {
        "(root)".to_string()
    } else {
        path
    };
    match &err.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            format!("{}: missing required field '{}'", at, name)
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => {
            format!("{}: expected {}", at, format_type_kind(kind))
        }
        _ => format!("{}: {}", at, err),
    }
}

fn format_type_kind(kind: &jsonschema::error::TypeKind) -> String {
    match kind {
        jsonschema::error::TypeKind::Single(primitive) => primitive.to_string(),
        jsonschema::error::TypeKind::Multiple(types) => {
            let list: Vec<String> = (*types).into_iter().map(|t| t.to_string()).collect();
            if list.is_empty() {
                "unknown".to_string()
            } else {
                list.join(" | ")
            }
        }
    }
}
