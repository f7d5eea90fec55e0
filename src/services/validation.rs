use crate::errors::ToolError;
use crate::utils::command_line::CommandLine;
use crate::utils::user_paths::expand_home_path;
use serde_json::Value;

/// Typed extraction of tool arguments. Schema validation in the executor
/// catches most shape errors first; these checks keep handlers safe when
/// invoked directly.
#[derive(Clone, Default)]
pub struct Validation;

impl Validation {
    pub fn new() -> Self {
        Self
    }

    pub fn ensure_string(&self, args: &Value, key: &str) -> Result<String, ToolError> {
        let text = args.get(key).and_then(Value::as_str).ok_or_else(|| {
            ToolError::invalid_params(format!("{} must be a non-empty string", key))
        })?;
        if text.trim().is_empty() {
            return Err(ToolError::invalid_params(format!(
                "{} must be a non-empty string",
                key
            )));
        }
        Ok(text.to_string())
    }

    pub fn ensure_optional_string(
        &self,
        args: &Value,
        key: &str,
    ) -> Result<Option<String>, ToolError> {
        match args.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(ToolError::invalid_params(format!(
                "{} must be a string",
                key
            ))),
        }
    }

    pub fn ensure_optional_bool(&self, args: &Value, key: &str) -> Result<bool, ToolError> {
        match args.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(ToolError::invalid_params(format!(
                "{} must be a boolean",
                key
            ))),
        }
    }

    /// Zero and absent both mean "use the default".
    pub fn ensure_optional_count(
        &self,
        args: &Value,
        key: &str,
    ) -> Result<Option<usize>, ToolError> {
        let Some(value) = args.get(key).filter(|v| !v.is_null()) else {
            return Ok(None);
        };
        let count = value
            .as_u64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .ok_or_else(|| {
                ToolError::invalid_params(format!("{} must be a non-negative integer", key))
            })?;
        Ok(if count == 0 { None } else { Some(count as usize) })
    }

    pub fn ensure_local_path(&self, args: &Value, key: &str) -> Result<String, ToolError> {
        let raw = self.ensure_string(args, key)?;
        Ok(expand_home_path(&raw).to_string_lossy().into_owned())
    }

    pub fn ensure_command_line(&self, args: &Value, key: &str) -> Result<CommandLine, ToolError> {
        let raw = self.ensure_string(args, key)?;
        CommandLine::parse(&raw).map_err(|err| err.with_details(serde_json::json!({ "field": key })))
    }

    /// Blank serials count as absent so the resolver falls back to the
    /// single attached device.
    pub fn device_serial(&self, args: &Value) -> Result<Option<String>, ToolError> {
        Ok(self
            .ensure_optional_string(args, "device_serial")?
            .map(|serial| serial.trim().to_string()))
    }
}
