use crate::constants::limits::MAX_SUGGESTIONS;
use crate::errors::ToolError;
use crate::utils::suggest::suggest;

pub fn unknown_operation_error(tool: &str, known_tools: &[String]) -> ToolError {
    let suggestions = suggest(tool, known_tools, MAX_SUGGESTIONS);
    let hint = if suggestions.is_empty() {
        "Call tools/list to see the available tools.".to_string()
    } else {
        format!(
            "Did you mean: {}? (tools/list shows every tool)",
            suggestions.join(", ")
        )
    };
    let mut known: Vec<String> = known_tools.to_vec();
    known.sort();
    ToolError::unknown_operation(format!("Unknown tool: {}", tool))
        .with_hint(hint)
        .with_details(serde_json::json!({
            "known_tools": known,
            "did_you_mean": suggestions,
        }))
}
