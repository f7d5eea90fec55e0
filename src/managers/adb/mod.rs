use crate::errors::ToolError;
use crate::services::adb::AdbClient;
use crate::services::device_resolver::DeviceResolver;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use crate::services::validation::Validation;
use serde_json::Value;
use std::sync::Arc;

mod capture;
mod logcat;
mod packages;
mod shell;
mod transfer;

pub use capture::ArtifactStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdbOperation {
    ListDevices,
    Shell,
    Install,
    Logcat,
    Pull,
    Push,
    Screenshot,
    UiHierarchy,
    PackageManager,
    ActivityManager,
}

impl AdbOperation {
    pub const ALL: [AdbOperation; 10] = [
        AdbOperation::ListDevices,
        AdbOperation::Shell,
        AdbOperation::Install,
        AdbOperation::Logcat,
        AdbOperation::Pull,
        AdbOperation::Push,
        AdbOperation::Screenshot,
        AdbOperation::UiHierarchy,
        AdbOperation::PackageManager,
        AdbOperation::ActivityManager,
    ];

    pub fn tool_name(self) -> &'static str {
        match self {
            AdbOperation::ListDevices => "adb_devices",
            AdbOperation::Shell => "adb_shell",
            AdbOperation::Install => "adb_install",
            AdbOperation::Logcat => "adb_logcat",
            AdbOperation::Pull => "adb_pull",
            AdbOperation::Push => "adb_push",
            AdbOperation::Screenshot => "adb_screenshot",
            AdbOperation::UiHierarchy => "adb_ui_hierarchy",
            AdbOperation::PackageManager => "adb_package_manager",
            AdbOperation::ActivityManager => "adb_activity_manager",
        }
    }
}

/// Owns the per-operation logic. Each operation resolves its target device
/// first and then issues its invocations strictly in sequence.
#[derive(Clone)]
pub struct AdbManager {
    logger: Logger,
    validation: Validation,
    adb: Arc<AdbClient>,
    resolver: Arc<DeviceResolver>,
}

impl AdbManager {
    pub fn new(
        logger: Logger,
        validation: Validation,
        adb: Arc<AdbClient>,
        resolver: Arc<DeviceResolver>,
    ) -> Self {
        Self {
            logger: logger.child("manager"),
            validation,
            adb,
            resolver,
        }
    }

    pub async fn handle_operation(
        &self,
        operation: AdbOperation,
        args: Value,
    ) -> Result<String, ToolError> {
        match operation {
            AdbOperation::ListDevices => self.list_devices().await,
            AdbOperation::Shell => self.shell(args).await,
            AdbOperation::Install => self.install(args).await,
            AdbOperation::Logcat => self.logcat(args).await,
            AdbOperation::Pull => self.pull(args).await,
            AdbOperation::Push => self.push(args).await,
            AdbOperation::Screenshot => self.screenshot(args).await,
            AdbOperation::UiHierarchy => self.ui_hierarchy(args).await,
            AdbOperation::PackageManager => self.package_manager(args).await,
            AdbOperation::ActivityManager => self.activity_manager(args).await,
        }
    }

    async fn target_device(&self, args: &Value) -> Result<String, ToolError> {
        let explicit = self.validation.device_serial(args)?;
        self.resolver.resolve(explicit.as_deref()).await
    }
}

/// Binds one operation to the shared manager so the executor can route by
/// tool name.
pub struct OperationHandler {
    manager: Arc<AdbManager>,
    operation: AdbOperation,
}

impl OperationHandler {
    pub fn new(manager: Arc<AdbManager>, operation: AdbOperation) -> Self {
        Self { manager, operation }
    }
}

#[async_trait::async_trait]
impl ToolHandler for OperationHandler {
    async fn handle(&self, args: Value) -> Result<String, ToolError> {
        self.manager.handle_operation(self.operation, args).await
    }
}
