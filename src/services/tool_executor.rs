use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ToolError;
use crate::mcp::catalog::validate_tool_args;
use crate::mcp::envelope::ToolResult;
use crate::services::logger::Logger;
use crate::utils::tool_errors::unknown_operation_error;

#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Produces the text payload for a successful call.
    async fn handle(&self, args: Value) -> Result<String, ToolError>;
}

/// Routes tool names to handlers and owns the single error-to-envelope
/// boundary.
#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
    alias_map: HashMap<String, String>,
}

impl ToolExecutor {
    pub fn new(
        logger: Logger,
        handlers: HashMap<String, Arc<dyn ToolHandler>>,
        alias_map: HashMap<String, String>,
    ) -> Self {
        Self {
            logger: logger.child("executor"),
            handlers: Arc::new(handlers),
            alias_map,
        }
    }

    pub fn resolve_tool<'a>(&'a self, tool: &'a str) -> &'a str {
        if self.handlers.contains_key(tool) {
            return tool;
        }
        self.alias_map
            .get(tool)
            .map(String::as_str)
            .unwrap_or(tool)
    }

    fn known_names(&self) -> Vec<String> {
        self.handlers
            .keys()
            .cloned()
            .chain(self.alias_map.keys().cloned())
            .collect()
    }

    /// Runs a tool and returns its raw text, propagating failures.
    pub async fn execute(&self, tool: &str, args: Value) -> Result<String, ToolError> {
        let resolved = self.resolve_tool(tool);
        let Some(handler) = self.handlers.get(resolved) else {
            return Err(unknown_operation_error(tool, &self.known_names()));
        };
        let args = if args.is_null() {
            Value::Object(Default::default())
        } else {
            args
        };
        validate_tool_args(resolved, &args)?;
        handler.handle(args).await
    }

    /// Runs a tool and always returns a well-formed envelope.
    pub async fn dispatch(&self, tool: &str, args: Value) -> ToolResult {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().timestamp_millis();
        let resolved = self.resolve_tool(tool).to_string();
        self.logger.debug(
            "call",
            Some(&serde_json::json!({
                "tool": resolved,
                "invoked_as": (resolved != tool).then_some(tool),
                "trace_id": trace_id,
            })),
        );

        let outcome = self.execute(tool, args).await;
        let duration_ms = chrono::Utc::now().timestamp_millis() - started_at;

        match outcome {
            Ok(text) => {
                self.logger.info(
                    "ok",
                    Some(&serde_json::json!({
                        "tool": resolved,
                        "trace_id": trace_id,
                        "duration_ms": duration_ms,
                        "bytes": text.len(),
                    })),
                );
                ToolResult::text(text)
            }
            Err(err) => {
                self.logger.warn(
                    "failed",
                    Some(&serde_json::json!({
                        "tool": resolved,
                        "trace_id": trace_id,
                        "duration_ms": duration_ms,
                        "kind": err.kind,
                        "code": err.code,
                        "message": err.message,
                    })),
                );
                ToolResult::error(&err)
            }
        }
    }
}
