use crate::errors::ToolError;

/// A free-form sub-command string (for `pm`, `am`, or a logcat filter)
/// split into arguments.
///
/// Splitting happens on plain whitespace only. There is no quoting or
/// escaping: `grant "com.example app"` yields the three tokens `grant`,
/// `"com.example` and `app"`. The device bridge joins the tokens again with
/// spaces before handing them to the device shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn parse(raw: &str) -> Result<Self, ToolError> {
        let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(ToolError::invalid_params("command must not be empty"));
        }
        Ok(Self { tokens })
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}
