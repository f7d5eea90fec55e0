use serde::Serialize;
use serde_json::Value;

/// Closed set of failure kinds an operation can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidParams,
    ExecutionFailed,
    NoDeviceConnected,
    AmbiguousDevice,
    UnknownOperation,
    Internal,
}

impl ToolErrorKind {
    pub fn default_code(self) -> &'static str {
        match self {
            ToolErrorKind::InvalidParams => "INVALID_PARAMS",
            ToolErrorKind::ExecutionFailed => "EXECUTION_FAILED",
            ToolErrorKind::NoDeviceConnected => "NO_DEVICE_CONNECTED",
            ToolErrorKind::AmbiguousDevice => "AMBIGUOUS_DEVICE",
            ToolErrorKind::UnknownOperation => "UNKNOWN_OPERATION",
            ToolErrorKind::Internal => "INTERNAL",
        }
    }
}

#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
        }
    }

    fn of_kind(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, kind.default_code(), message)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::of_kind(ToolErrorKind::InvalidParams, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::of_kind(ToolErrorKind::ExecutionFailed, message)
    }

    pub fn output_too_large(limit: usize) -> Self {
        Self::of_kind(
            ToolErrorKind::ExecutionFailed,
            format!("ADB command failed: output exceeded {} bytes", limit),
        )
        .with_code("OUTPUT_TOO_LARGE")
    }

    pub fn no_device_connected() -> Self {
        Self::of_kind(ToolErrorKind::NoDeviceConnected, "No devices connected")
    }

    pub fn ambiguous_device(candidates: &[String]) -> Self {
        Self::of_kind(
            ToolErrorKind::AmbiguousDevice,
            "Multiple devices connected. Please specify device_serial parameter",
        )
        .with_details(serde_json::json!({ "devices": candidates }))
    }

    pub fn unknown_operation(message: impl Into<String>) -> Self {
        Self::of_kind(ToolErrorKind::UnknownOperation, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::of_kind(ToolErrorKind::Internal, message)
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}
