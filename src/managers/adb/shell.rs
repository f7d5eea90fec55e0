use crate::errors::ToolError;
use crate::services::adb::argv;
use serde_json::Value;

use super::AdbManager;

impl AdbManager {
    pub(super) async fn list_devices(&self) -> Result<String, ToolError> {
        self.adb.exec(argv(["devices", "-l"])).await
    }

    /// The command string reaches the device shell as one argument and is
    /// interpreted there.
    pub(super) async fn shell(&self, args: Value) -> Result<String, ToolError> {
        let command = self.validation.ensure_string(&args, "command")?;
        let serial = self.target_device(&args).await?;
        self.adb.exec_on(&serial, argv(["shell".to_string(), command])).await
    }

    pub(super) async fn package_manager(&self, args: Value) -> Result<String, ToolError> {
        self.shell_tool("pm", &args).await
    }

    pub(super) async fn activity_manager(&self, args: Value) -> Result<String, ToolError> {
        self.shell_tool("am", &args).await
    }

    async fn shell_tool(&self, tool: &str, args: &Value) -> Result<String, ToolError> {
        let command = self.validation.ensure_command_line(args, "command")?;
        let serial = self.target_device(args).await?;
        let mut full = argv(["shell", tool]);
        full.extend(command.into_tokens());
        self.adb.exec_on(&serial, full).await
    }
}
