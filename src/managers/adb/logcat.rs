use crate::constants::logcat::DEFAULT_MAX_LINES;
use crate::errors::ToolError;
use crate::services::adb::argv;
use crate::utils::command_line::CommandLine;
use crate::utils::text::tail_lines;
use serde_json::Value;

use super::AdbManager;

impl AdbManager {
    /// Dumps the log buffer once (`logcat -d`) and keeps the newest lines.
    pub(super) async fn logcat(&self, args: Value) -> Result<String, ToolError> {
        let filter = self
            .validation
            .ensure_optional_string(&args, "filter")?
            .map(|raw| CommandLine::parse(&raw))
            .transpose()?;
        let max_lines = self
            .validation
            .ensure_optional_count(&args, "max_lines")?
            .unwrap_or(DEFAULT_MAX_LINES);
        let serial = self.target_device(&args).await?;

        let mut dump = argv(["logcat", "-d"]);
        if let Some(filter) = filter {
            dump.extend(filter.into_tokens());
        }
        let output = self.adb.exec_on(&serial, dump).await?;
        Ok(tail_lines(&output, max_lines))
    }
}
