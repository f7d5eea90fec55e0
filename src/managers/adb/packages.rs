use crate::errors::ToolError;
use crate::services::adb::argv;
use serde_json::Value;

use super::AdbManager;

impl AdbManager {
    pub(super) async fn install(&self, args: Value) -> Result<String, ToolError> {
        let apk_path = self.validation.ensure_local_path(&args, "apk_path")?;
        let reinstall = self.validation.ensure_optional_bool(&args, "reinstall")?;
        let serial = self.target_device(&args).await?;

        let mut install = argv(["install"]);
        if reinstall {
            install.push("-r".to_string());
        }
        install.push(apk_path);
        self.adb.exec_on(&serial, install).await
    }
}
