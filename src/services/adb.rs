use crate::config::AdbConfig;
use crate::constants::limits::COMMAND_PREVIEW_LENGTH;
use crate::errors::ToolError;
use crate::services::logger::Logger;
use crate::services::process_runner::{CapturedOutput, CommandRunner};
use crate::utils::text::preview_args;
use std::sync::Arc;

/// Turns a finished invocation into the text handed back to the caller.
///
/// A failed exit is an error carrying the most useful stream. A clean exit
/// that only wrote to stderr returns stderr, since the bridge reports some
/// results (transfer summaries, install status on older builds) there.
pub fn interpret_output(output: CapturedOutput) -> Result<String, ToolError> {
    if !output.success {
        let reason = [output.stderr.trim(), output.stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| match output.exit_code {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            });
        return Err(
            ToolError::execution_failed(format!("ADB command failed: {}", reason)).with_details(
                serde_json::json!({
                    "exit_code": output.exit_code,
                }),
            ),
        );
    }
    if output.stdout.is_empty() && !output.stderr.is_empty() {
        return Ok(output.stderr);
    }
    Ok(output.stdout)
}

/// Thin client over the device-bridge executable. Every call is a fresh
/// process; nothing is cached between calls.
#[derive(Clone)]
pub struct AdbClient {
    logger: Logger,
    config: Arc<AdbConfig>,
    runner: Arc<dyn CommandRunner>,
}

impl AdbClient {
    pub fn new(logger: Logger, config: Arc<AdbConfig>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            logger: logger.child("adb"),
            config,
            runner,
        }
    }

    pub fn config(&self) -> &AdbConfig {
        &self.config
    }

    pub async fn exec(&self, args: Vec<String>) -> Result<String, ToolError> {
        self.logger.debug(
            "exec",
            Some(&serde_json::json!({
                "program": self.config.adb_path.display().to_string(),
                "args": preview_args(&args, COMMAND_PREVIEW_LENGTH),
            })),
        );
        let started = chrono::Utc::now().timestamp_millis();
        let captured = self
            .runner
            .run(&self.config.adb_path, &args, self.config.max_output_bytes)
            .await;
        let duration_ms = chrono::Utc::now().timestamp_millis() - started;
        let result = captured.and_then(interpret_output);
        if let Err(err) = &result {
            self.logger.debug(
                "exec failed",
                Some(&serde_json::json!({
                    "code": err.code,
                    "duration_ms": duration_ms,
                })),
            );
        }
        result
    }

    /// Runs `adb -s <serial> <args...>`.
    pub async fn exec_on(&self, serial: &str, args: Vec<String>) -> Result<String, ToolError> {
        let mut full = Vec::with_capacity(args.len() + 2);
        full.push("-s".to_string());
        full.push(serial.to_string());
        full.extend(args);
        self.exec(full).await
    }
}

/// Builds an owned argument vector from string slices.
pub fn argv<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}
