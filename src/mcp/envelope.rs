use crate::errors::{ToolError, ToolErrorKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// Caller-facing result of a `tools/call`. Exactly one is produced per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError")]
    pub is_error: bool,
    #[serde(skip)]
    pub error_kind: Option<ToolErrorKind>,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
            error_kind: None,
        }
    }

    pub fn error(err: &ToolError) -> Self {
        Self {
            content: vec![Content::Text {
                text: render_error(err),
            }],
            is_error: true,
            error_kind: Some(err.kind),
        }
    }

    /// First text item, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|item| match item {
            Content::Text { text } => Some(text.as_str()),
        })
    }
}

fn render_error(err: &ToolError) -> String {
    let mut lines = vec![
        format!("Error: {}", err.message),
        format!("code: {}", err.code),
    ];
    if let Some(hint) = &err.hint {
        lines.push(format!("hint: {}", hint));
    }
    lines.join("\n")
}
