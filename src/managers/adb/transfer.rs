use crate::errors::ToolError;
use crate::services::adb::argv;
use serde_json::Value;

use super::AdbManager;

impl AdbManager {
    pub(super) async fn pull(&self, args: Value) -> Result<String, ToolError> {
        let remote_path = self.validation.ensure_string(&args, "remote_path")?;
        let local_path = self.validation.ensure_local_path(&args, "local_path")?;
        let serial = self.target_device(&args).await?;
        self.adb
            .exec_on(&serial, argv(["pull".to_string(), remote_path, local_path]))
            .await
    }

    pub(super) async fn push(&self, args: Value) -> Result<String, ToolError> {
        let local_path = self.validation.ensure_local_path(&args, "local_path")?;
        let remote_path = self.validation.ensure_string(&args, "remote_path")?;
        let serial = self.target_device(&args).await?;
        self.adb
            .exec_on(&serial, argv(["push".to_string(), local_path, remote_path]))
            .await
    }
}
